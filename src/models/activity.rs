use super::clock::ClockTime;
use super::sub_step::{SubStep, de_id};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANALYSIS_INTERVAL: i64 = 30;

/// A single work activity of the site schedule, as handed over by the store.
///
/// The analytics only ever read this value; edits happen upstream and every
/// computation starts again from a full snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub discipline: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    /// Planned output for the whole activity.
    #[serde(default)]
    pub target_quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_shift_start")]
    pub shift_start: ClockTime,
    #[serde(default = "default_shift_end")]
    pub shift_end: ClockTime,
    #[serde(default = "default_lunch_start")]
    pub lunch_start: ClockTime,
    #[serde(default = "default_lunch_end")]
    pub lunch_end: ClockTime,
    #[serde(default = "default_interval")]
    pub analysis_interval_minutes: i64,
    #[serde(default)]
    pub sub_steps: Vec<SubStep>,
}

fn default_shift_start() -> ClockTime {
    ClockTime::hm(7, 0)
}
fn default_shift_end() -> ClockTime {
    ClockTime::hm(17, 0)
}
fn default_lunch_start() -> ClockTime {
    ClockTime::hm(12, 0)
}
fn default_lunch_end() -> ClockTime {
    ClockTime::hm(13, 0)
}
fn default_interval() -> i64 {
    DEFAULT_ANALYSIS_INTERVAL
}

impl Default for Activity {
    fn default() -> Self {
        Self {
            id: String::new(),
            discipline: String::new(),
            service: String::new(),
            location: String::new(),
            date: String::new(),
            target_quantity: 0.0,
            unit: String::new(),
            shift_start: default_shift_start(),
            shift_end: default_shift_end(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            analysis_interval_minutes: default_interval(),
            sub_steps: Vec::new(),
        }
    }
}

impl Activity {
    /// Sub-steps ordered by start time. Ties keep their stored order.
    pub fn sorted_steps(&self) -> Vec<&SubStep> {
        let mut steps: Vec<&SubStep> = self.sub_steps.iter().collect();
        steps.sort_by_key(|s| s.start_time);
        steps
    }

    /// Analysis step in minutes; non-positive values fall back to the default.
    pub fn effective_interval(&self) -> i64 {
        if self.analysis_interval_minutes > 0 {
            self.analysis_interval_minutes
        } else {
            DEFAULT_ANALYSIS_INTERVAL
        }
    }

    /// Short human title, e.g. `A-12 · Concrete slab (m³)`.
    pub fn title(&self) -> String {
        let mut out = if self.id.is_empty() {
            self.service.clone()
        } else if self.service.is_empty() {
            self.id.clone()
        } else {
            format!("{} · {}", self.id, self.service)
        };

        if !self.unit.is_empty() {
            out.push_str(&format!(" ({})", self.unit));
        }

        out
    }
}
