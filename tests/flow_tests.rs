use siteflow::core::calculator::flow::classify_window;
use siteflow::{FlowStatus, Severity, WorkerRole, analyze_flow};

mod common;
use common::{activity, step, support, t, with_crew};

#[test]
fn no_sub_steps_means_no_blocks() {
    assert!(analyze_flow(&activity(vec![])).is_empty());
}

#[test]
fn idle_day_scenario_blocks() {
    let a = activity(vec![with_crew(
        step("1", "Masonry", "07:00", "09:00"),
        WorkerRole::Mason,
        4,
    )]);

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].status, FlowStatus::Idle);
    assert_eq!(blocks[0].start_time, t("09:00"));
    assert_eq!(blocks[0].end_time, t("12:00"));
    assert_eq!(blocks[0].severity, Severity::Bad);
    assert_eq!(blocks[0].message, "unplanned stoppage");

    assert_eq!(blocks[1].status, FlowStatus::Lunch);
    assert_eq!(blocks[1].start_time, t("12:00"));
    assert_eq!(blocks[1].end_time, t("13:00"));
    assert_eq!(blocks[1].severity, Severity::Neutral);
    assert_eq!(blocks[1].message, "scheduled break");

    assert_eq!(blocks[2].status, FlowStatus::Idle);
    assert_eq!(blocks[2].start_time, t("13:00"));
    assert_eq!(blocks[2].end_time, t("17:00"));
}

#[test]
fn overlapping_productive_steps_are_a_bottleneck() {
    // Stored out of order on purpose: the analyzer sorts by start time.
    let a = activity(vec![
        step("2", "Rebar", "09:30", "10:30"),
        step("1", "Concreting", "09:00", "10:00"),
    ]);

    let blocks = analyze_flow(&a);
    let conflict = blocks
        .iter()
        .find(|b| b.status == FlowStatus::Bottleneck)
        .expect("a bottleneck block");

    assert_eq!(conflict.start_time, t("09:30"));
    assert_eq!(conflict.end_time, t("10:00"));
    assert_eq!(conflict.severity, Severity::Bad);
    assert_eq!(conflict.message, "conflict: Concreting + Rebar");
    assert_eq!(blocks.iter().filter(|b| b.status == FlowStatus::Bottleneck).count(), 1);
}

#[test]
fn support_only_windows_are_unproductive() {
    let a = activity(vec![
        support(step("1", "Mobilization", "07:00", "08:00")),
        support(step("2", "Unloading", "07:30", "08:00")),
        step("3", "Masonry", "08:00", "12:00"),
        step("4", "Masonry PM", "13:00", "17:00"),
    ]);

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].status, FlowStatus::Unproductive);
    assert_eq!(blocks[0].severity, Severity::Warn);
    assert_eq!(blocks[0].message, "support activity: Mobilization");
    assert_eq!((blocks[0].start_time, blocks[0].end_time), (t("07:00"), t("07:30")));

    // Different message → separate block, even with the same status.
    assert_eq!(blocks[1].message, "support activity: Mobilization + Unloading");
    assert_eq!((blocks[1].start_time, blocks[1].end_time), (t("07:30"), t("08:00")));

    assert_eq!(blocks[2].status, FlowStatus::Lunch);
}

#[test]
fn one_productive_step_with_support_alongside_is_normal_work() {
    let a = activity(vec![
        step("1", "Masonry", "07:00", "12:00"),
        support(step("2", "Cleanup", "10:00", "11:00")),
        step("3", "Masonry PM", "13:00", "17:00"),
    ]);

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].status, FlowStatus::Lunch);
}

#[test]
fn lunch_wins_over_anything_scheduled() {
    let a = activity(vec![
        step("1", "Concreting", "11:00", "14:00"),
        step("2", "Rebar", "11:00", "14:00"),
    ]);
    let steps = a.sorted_steps();

    let busy = classify_window(&a, &steps, t("12:00"), 30).expect("classified");
    assert_eq!(busy.status, FlowStatus::Lunch);

    let empty = activity(vec![step("1", "Far away", "07:00", "07:30")]);
    let steps = empty.sorted_steps();
    let quiet = classify_window(&empty, &steps, t("12:30"), 30).expect("classified");
    assert_eq!(quiet.status, FlowStatus::Lunch);
}

#[test]
fn lunch_uses_the_window_midpoint() {
    let mut a = activity(vec![step("1", "Masonry", "07:00", "17:00")]);
    a.lunch_start = t("12:10");
    a.lunch_end = t("12:50");
    let steps = a.sorted_steps();

    // [12:00, 12:30) → mid 12:15 inside; [12:30, 13:00) → mid 12:45 inside.
    assert!(classify_window(&a, &steps, t("12:00"), 30).is_some());
    assert!(classify_window(&a, &steps, t("12:30"), 30).is_some());

    // [11:30, 12:00) → mid 11:45 outside, single productive step.
    assert!(classify_window(&a, &steps, t("11:30"), 30).is_none());
}

#[test]
fn adjacent_identical_windows_merge_into_one_block() {
    let mut a = activity(vec![step("1", "Masonry", "07:00", "08:00")]);
    a.shift_end = t("09:00");
    a.lunch_start = t("13:00");
    a.lunch_end = t("14:00");

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].status, FlowStatus::Idle);
    assert_eq!(blocks[0].start_time, t("08:00"));
    assert_eq!(blocks[0].end_time, t("09:00"));
}

#[test]
fn touching_steps_do_not_overlap() {
    let a = activity(vec![
        step("1", "Formwork", "07:00", "09:00"),
        step("2", "Concreting", "09:00", "12:00"),
        step("3", "Curing", "13:00", "17:00"),
    ]);

    let blocks = analyze_flow(&a);
    assert!(blocks.iter().all(|b| b.status != FlowStatus::Bottleneck));
    assert!(blocks.iter().all(|b| b.status != FlowStatus::Idle));
}

#[test]
fn last_window_may_run_past_the_shift_end() {
    let mut a = activity(vec![step("1", "Masonry", "07:00", "07:30")]);
    a.shift_end = t("08:10");
    a.analysis_interval_minutes = 20;

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_time, t("07:40"));
    assert_eq!(blocks[0].end_time, t("08:20"));
}

#[test]
fn huge_interval_yields_one_well_formed_window() {
    let mut a = activity(vec![step("1", "Early delivery", "05:00", "06:00")]);
    a.analysis_interval_minutes = i64::MAX;

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].status, FlowStatus::Idle);
    assert_eq!(blocks[0].start_time, t("07:00"));
    assert!(blocks[0].end_time > blocks[0].start_time);
}

#[test]
fn non_positive_interval_falls_back_to_thirty_minutes() {
    let mut a = activity(vec![step("1", "Masonry", "07:00", "09:00")]);
    a.analysis_interval_minutes = 0;

    let mut reference = a.clone();
    reference.analysis_interval_minutes = 30;

    assert_eq!(analyze_flow(&a), analyze_flow(&reference));
}

#[test]
fn inverted_shift_yields_nothing() {
    let mut a = activity(vec![step("1", "Masonry", "07:00", "09:00")]);
    a.shift_start = t("17:00");
    a.shift_end = t("07:00");

    assert!(analyze_flow(&a).is_empty());
}

#[test]
fn inverted_step_still_takes_part_in_overlap_tests() {
    // A 10:00-09:00 range cannot overlap any window between 09:00 and 10:00.
    let mut a = activity(vec![step("1", "Backwards", "10:00", "09:00")]);
    a.shift_start = t("09:00");
    a.shift_end = t("10:00");
    a.lunch_start = t("12:00");

    let blocks = analyze_flow(&a);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].status, FlowStatus::Idle);
}

#[test]
fn blocks_are_chronological_and_disjoint() {
    let a = activity(vec![
        support(step("1", "Mobilization", "07:00", "07:45")),
        step("2", "Formwork", "07:45", "10:15"),
        step("3", "Rebar", "09:15", "11:00"),
        step("4", "Concreting", "14:00", "15:30"),
        support(step("5", "Cleanup", "16:00", "17:00")),
    ]);

    let blocks = analyze_flow(&a);
    assert!(!blocks.is_empty());
    for pair in blocks.windows(2) {
        assert!(pair[0].end_time <= pair[1].start_time);
    }
    assert_eq!(analyze_flow(&a), blocks);
}
