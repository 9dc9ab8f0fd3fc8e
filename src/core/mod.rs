pub mod calculator;
pub mod config;
pub mod logic;
pub mod normalize;
pub mod report;
pub mod validate;
