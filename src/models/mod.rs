pub mod activity;
pub mod clock;
pub mod role;
pub mod sub_step;
pub mod worker;

pub use activity::Activity;
pub use clock::ClockTime;
pub use role::WorkerRole;
pub use sub_step::SubStep;
pub use worker::{WorkerAssignment, merge_assignments};
