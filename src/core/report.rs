//! Serializable outputs handed to the presentation and narrative collaborators.

use crate::core::calculator::{ActivityMetrics, FlowBlock};
use crate::models::{Activity, ClockTime};
use serde::{Deserialize, Serialize};

/// Metrics and anomaly blocks of one activity, ready for rendering or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    pub activity_id: String,
    pub service: String,
    pub date: String,
    pub unit: String,
    pub target_quantity: f64,
    pub shift_start: ClockTime,
    pub shift_end: ClockTime,
    pub metrics: ActivityMetrics,
    pub blocks: Vec<FlowBlock>,
}

/// Input for the external narrative report generator: metrics plus the
/// ordered sub-step list, plain data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeInput {
    pub activity_id: String,
    pub discipline: String,
    pub service: String,
    pub location: String,
    pub date: String,
    pub unit: String,
    pub target_quantity: f64,
    pub metrics: ActivityMetrics,
    pub steps: Vec<NarrativeStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeStep {
    pub description: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub workers: Vec<NarrativeWorker>,
    pub machinery_count: u32,
    pub is_unproductive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeWorker {
    pub role: String,
    pub count: u32,
}

impl NarrativeInput {
    pub fn new(activity: &Activity, metrics: ActivityMetrics) -> Self {
        let steps = activity
            .sorted_steps()
            .into_iter()
            .map(|s| NarrativeStep {
                description: s.description.clone(),
                start_time: s.start_time,
                end_time: s.end_time,
                workers: s
                    .workers
                    .iter()
                    .map(|w| NarrativeWorker {
                        role: w.role_name().to_string(),
                        count: w.count,
                    })
                    .collect(),
                machinery_count: s.machinery_count,
                is_unproductive: s.is_unproductive,
            })
            .collect();

        Self {
            activity_id: activity.id.clone(),
            discipline: activity.discipline.clone(),
            service: activity.service.clone(),
            location: activity.location.clone(),
            date: activity.date.clone(),
            unit: activity.unit.clone(),
            target_quantity: activity.target_quantity,
            metrics,
            steps,
        }
    }
}
