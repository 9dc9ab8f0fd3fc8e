//! Edit-boundary validation.
//!
//! The analytics accept anything and degrade gracefully; this module is what
//! an editor (or the `check` command) runs before saving, to tell the user
//! which inputs will produce surprising numbers.

use crate::models::{Activity, SubStep};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    InvalidTimeRange,
    MissingCustomRole,
    NonPositiveCount,
    DuplicateRole,
    NonPositiveInterval,
    NegativeQuantity,
    ShiftEndBeforeStart,
    LunchOutsideShift,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub kind: IssueKind,
    /// Offending sub-step, `None` for activity-level issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_step: Option<String>,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_step {
            Some(id) => write!(f, "[{:?}] step '{}': {}", self.kind, id, self.message),
            None => write!(f, "[{:?}] {}", self.kind, self.message),
        }
    }
}

fn step_label(step: &SubStep) -> String {
    if step.id.is_empty() {
        step.description.clone()
    } else {
        step.id.clone()
    }
}

fn activity_issue(kind: IssueKind, message: String) -> ValidationIssue {
    ValidationIssue {
        kind,
        sub_step: None,
        message,
    }
}

fn step_issues(step: &SubStep, out: &mut Vec<ValidationIssue>) {
    let mut push = |kind, message: String| {
        out.push(ValidationIssue {
            kind,
            sub_step: Some(step_label(step)),
            message,
        })
    };

    if step.end_time <= step.start_time {
        push(
            IssueKind::InvalidTimeRange,
            format!(
                "end {} is not after start {}; the step counts as zero hours",
                step.end_time, step.start_time
            ),
        );
    }

    if step.produced_quantity.is_some_and(|q| q < 0.0) {
        push(
            IssueKind::NegativeQuantity,
            "produced quantity is negative".to_string(),
        );
    }

    let mut seen = HashSet::new();
    for w in &step.workers {
        if w.role.is_custom() && w.role_name().trim().is_empty() {
            push(
                IssueKind::MissingCustomRole,
                "role 'Other' needs a custom role name".to_string(),
            );
        }

        if w.count == 0 {
            push(
                IssueKind::NonPositiveCount,
                format!("'{}' has a worker count of 0", w.role_name()),
            );
        }

        if !seen.insert(w.role_name()) {
            push(
                IssueKind::DuplicateRole,
                format!("'{}' is listed more than once; counts should be merged", w.role_name()),
            );
        }
    }
}

/// Collects every problem found on the activity. An empty list means the
/// activity can be saved as-is.
pub fn validate_activity(activity: &Activity) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if activity.analysis_interval_minutes <= 0 {
        issues.push(activity_issue(
            IssueKind::NonPositiveInterval,
            format!(
                "analysis interval is {} minutes; it must be greater than 0",
                activity.analysis_interval_minutes
            ),
        ));
    }

    if activity.target_quantity < 0.0 {
        issues.push(activity_issue(
            IssueKind::NegativeQuantity,
            format!("target quantity {} is negative", activity.target_quantity),
        ));
    }

    if activity.shift_end <= activity.shift_start {
        issues.push(activity_issue(
            IssueKind::ShiftEndBeforeStart,
            format!(
                "shift end {} is not after shift start {}",
                activity.shift_end, activity.shift_start
            ),
        ));
    }

    if activity.lunch_start < activity.shift_start
        || activity.lunch_end > activity.shift_end
        || activity.lunch_end < activity.lunch_start
    {
        issues.push(activity_issue(
            IssueKind::LunchOutsideShift,
            format!(
                "lunch {}-{} is not within the shift {}-{}",
                activity.lunch_start, activity.lunch_end, activity.shift_start, activity.shift_end
            ),
        ));
    }

    for step in &activity.sub_steps {
        step_issues(step, &mut issues);
    }

    issues
}
