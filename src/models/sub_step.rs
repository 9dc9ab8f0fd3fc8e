use super::clock::ClockTime;
use super::worker::WorkerAssignment;
use serde::{Deserialize, Deserializer, Serialize};

/// One timed slice of an activity (e.g. "Formwork", "Cleanup").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStep {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_time: ClockTime,
    #[serde(default)]
    pub end_time: ClockTime,
    #[serde(default)]
    pub workers: Vec<WorkerAssignment>,
    #[serde(default)]
    pub machinery_count: u32,
    /// Support work (mobilization, cleanup...) that does not produce the target quantity.
    #[serde(default)]
    pub is_unproductive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produced_quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

impl SubStep {
    /// Scheduled length in minutes, never negative.
    pub fn duration_minutes(&self) -> i64 {
        self.start_time.minutes_until(self.end_time).max(0)
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }

    /// Half-open overlap test against `[start, end)`.
    pub fn overlaps(&self, start: ClockTime, end: ClockTime) -> bool {
        self.start_time < end && self.end_time > start
    }

    pub fn is_productive(&self) -> bool {
        !self.is_unproductive
    }
}

/// Remote stores hand out both numeric and string identifiers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

pub(crate) fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
