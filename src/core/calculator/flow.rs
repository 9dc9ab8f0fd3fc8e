//! Flow analysis: fixed-interval classification of the shift, followed by
//! run-length merging of identically classified windows into blocks.
//!
//! Precedence per window (midpoint based for lunch, half-open overlap for
//! sub-steps): Lunch > Idle > Unproductive > Bottleneck > normal work.
//! Normal single-threaded work is not reported.
//!
//! The last window is not clipped to the shift end: when the interval does
//! not divide the shift length, the final block may run past it.

use crate::models::{Activity, ClockTime, SubStep};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

pub const MSG_LUNCH: &str = "scheduled break";
pub const MSG_IDLE: &str = "unplanned stoppage";
pub const PREFIX_SUPPORT: &str = "support activity: ";
pub const PREFIX_CONFLICT: &str = "conflict: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowStatus {
    Lunch,
    Idle,
    Unproductive,
    Bottleneck,
}

impl FlowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStatus::Lunch => "Lunch",
            FlowStatus::Idle => "Idle",
            FlowStatus::Unproductive => "Unproductive",
            FlowStatus::Bottleneck => "Bottleneck",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FlowStatus::Lunch => Severity::Neutral,
            FlowStatus::Unproductive => Severity::Warn,
            FlowStatus::Idle | FlowStatus::Bottleneck => Severity::Bad,
        }
    }
}

impl fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual priority of a block, for colour-coding by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Bad,
    Warn,
    Neutral,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Bad => "bad",
            Severity::Warn => "warn",
            Severity::Neutral => "neutral",
        }
    }
}

/// A reportable stretch of the shift `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowBlock {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub status: FlowStatus,
    pub message: String,
    pub severity: Severity,
}

impl FlowBlock {
    pub fn duration_minutes(&self) -> i64 {
        self.start_time.minutes_until(self.end_time)
    }
}

/// Outcome of classifying one analysis window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowClass {
    pub status: FlowStatus,
    pub message: String,
}

impl WindowClass {
    fn new(status: FlowStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

fn join_descriptions(steps: &[&SubStep]) -> String {
    steps
        .iter()
        .map(|s| s.description.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Classifies the window `[start, start + interval)`.
///
/// `steps` must already be sorted by start time; message order follows it.
/// Returns `None` for normal work (exactly one productive sub-step active).
pub fn classify_window(
    activity: &Activity,
    steps: &[&SubStep],
    start: ClockTime,
    interval: i64,
) -> Option<WindowClass> {
    let end = start.add_minutes(interval);

    // Midpoint test in doubled units keeps odd intervals exact; i128 so huge
    // intervals cannot overflow.
    let mid2 = 2 * start.minutes() as i128 + interval as i128;
    let lunch_start2 = 2 * activity.lunch_start.minutes() as i128;
    let lunch_end2 = 2 * activity.lunch_end.minutes() as i128;
    if lunch_start2 <= mid2 && mid2 < lunch_end2 {
        return Some(WindowClass::new(FlowStatus::Lunch, MSG_LUNCH));
    }

    let active: Vec<&SubStep> = steps
        .iter()
        .copied()
        .filter(|s| s.overlaps(start, end))
        .collect();

    if active.is_empty() {
        return Some(WindowClass::new(FlowStatus::Idle, MSG_IDLE));
    }

    if active.iter().all(|s| s.is_unproductive) {
        let msg = format!("{PREFIX_SUPPORT}{}", join_descriptions(&active));
        return Some(WindowClass::new(FlowStatus::Unproductive, msg));
    }

    let productive: Vec<&SubStep> = active.iter().copied().filter(|s| s.is_productive()).collect();
    if productive.len() > 1 {
        let msg = format!("{PREFIX_CONFLICT}{}", join_descriptions(&productive));
        return Some(WindowClass::new(FlowStatus::Bottleneck, msg));
    }

    None
}

/// Segments the activity's shift into anomaly blocks, in chronological order.
///
/// An activity without sub-steps yields no blocks at all.
pub fn analyze_flow(activity: &Activity) -> Vec<FlowBlock> {
    if activity.sub_steps.is_empty() {
        return Vec::new();
    }

    let steps = activity.sorted_steps();
    let interval = activity.effective_interval();
    let shift_end = activity.shift_end;

    let mut blocks: Vec<FlowBlock> = Vec::new();
    let mut open: Option<FlowBlock> = None;
    let mut t = activity.shift_start;

    while t < shift_end {
        let window_end = t.add_minutes(interval);
        let class = classify_window(activity, &steps, t, interval);
        trace!(window = %t, ?class, "window classified");

        let extends_open = matches!(
            (&open, &class),
            (Some(block), Some(c)) if block.status == c.status && block.message == c.message
        );

        if extends_open {
            // ---- extend ----
            if let Some(block) = open.as_mut() {
                block.end_time = window_end;
            }
        } else {
            // ---- close, then open or go quiet ----
            if let Some(done) = open.take() {
                blocks.push(done);
            }
            open = class.map(|c| FlowBlock {
                start_time: t,
                end_time: window_end,
                severity: c.status.severity(),
                status: c.status,
                message: c.message,
            });
        }

        t = window_end;
    }

    if let Some(done) = open {
        blocks.push(done);
    }

    debug!(
        activity = %activity.id,
        interval,
        blocks = blocks.len(),
        "flow analyzed"
    );

    blocks
}
