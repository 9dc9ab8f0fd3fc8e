//! Man-hour accounting and productivity ratios (RUP, productivity rate).

use crate::models::Activity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Labour and equipment totals for one activity.
///
/// All values are kept at full precision; rounding happens only when they
/// are displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    pub productive_man_hours: f64,
    pub unproductive_man_hours: f64,
    /// Equipment hours on productive sub-steps only.
    pub total_machine_hours: f64,
    /// Productive man-hours per unit of target quantity (lower is better).
    pub rup: f64,
    /// Target quantity per productive man-hour.
    pub productivity_rate: f64,
    /// Man-hours per effective role name.
    pub resource_summary: BTreeMap<String, f64>,
}

impl ActivityMetrics {
    pub fn total_man_hours(&self) -> f64 {
        self.productive_man_hours + self.unproductive_man_hours
    }

    /// Share of man-hours spent on productive work, in `[0, 1]`.
    pub fn productive_share(&self) -> f64 {
        let total = self.total_man_hours();
        if total > 0.0 {
            self.productive_man_hours / total
        } else {
            0.0
        }
    }
}

pub fn compute_metrics(activity: &Activity) -> ActivityMetrics {
    let mut m = ActivityMetrics::default();

    for step in &activity.sub_steps {
        let hours = step.duration_hours();

        for w in &step.workers {
            let man_hours = hours * w.count as f64;

            *m.resource_summary
                .entry(w.role_name().to_string())
                .or_insert(0.0) += man_hours;

            if step.is_unproductive {
                m.unproductive_man_hours += man_hours;
            } else {
                m.productive_man_hours += man_hours;
            }
        }

        // Equipment on support steps stays out of the machine total.
        if !step.is_unproductive {
            m.total_machine_hours += hours * step.machinery_count as f64;
        }
    }

    m.rup = if activity.target_quantity > 0.0 {
        m.productive_man_hours / activity.target_quantity
    } else {
        0.0
    };

    m.productivity_rate = if m.productive_man_hours > 0.0 {
        activity.target_quantity / m.productive_man_hours
    } else {
        0.0
    };

    debug!(
        activity = %activity.id,
        productive = m.productive_man_hours,
        unproductive = m.unproductive_man_hours,
        rup = m.rup,
        "metrics computed"
    );

    m
}
