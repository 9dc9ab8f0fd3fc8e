use crate::models::{Activity, merge_assignments};

/// Canonical form of an activity for saving: sub-steps ordered by start time
/// and duplicate crew assignments merged. Analytics results are unchanged.
pub fn normalize_activity(activity: &Activity) -> Activity {
    let mut out = activity.clone();

    out.sub_steps.sort_by_key(|s| s.start_time);
    for step in &mut out.sub_steps {
        step.workers = merge_assignments(&step.workers);
    }

    out
}
