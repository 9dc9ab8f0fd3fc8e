//! Pure analytics over a single activity snapshot.

pub mod flow;
pub mod metrics;

pub use flow::{FlowBlock, FlowStatus, Severity, analyze_flow};
pub use metrics::{ActivityMetrics, compute_metrics};
