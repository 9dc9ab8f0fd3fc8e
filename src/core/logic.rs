use crate::core::calculator::{analyze_flow, compute_metrics};
use crate::core::report::{ActivityReport, NarrativeInput};
use crate::models::Activity;

pub struct Core;

impl Core {
    /// Runs both analytics on the same snapshot. Neither depends on the other.
    pub fn build_report(activity: &Activity) -> ActivityReport {
        let metrics = compute_metrics(activity);
        let blocks = analyze_flow(activity);

        ActivityReport {
            activity_id: activity.id.clone(),
            service: activity.service.clone(),
            date: activity.date.clone(),
            unit: activity.unit.clone(),
            target_quantity: activity.target_quantity,
            shift_start: activity.shift_start,
            shift_end: activity.shift_end,
            metrics,
            blocks,
        }
    }

    pub fn build_narrative(activity: &Activity) -> NarrativeInput {
        NarrativeInput::new(activity, compute_metrics(activity))
    }

    /// Applies a caller-side interval override to a copy of the snapshot.
    pub fn with_interval(activity: &Activity, interval: Option<i64>) -> Activity {
        let mut a = activity.clone();
        if let Some(i) = interval {
            a.analysis_interval_minutes = i;
        }
        a
    }
}
