#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use siteflow::{Activity, ClockTime, SubStep, WorkerAssignment, WorkerRole};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sf() -> Command {
    cargo_bin_cmd!("siteflow")
}

pub fn t(s: &str) -> ClockTime {
    s.parse().expect("valid HH:MM")
}

pub fn step(id: &str, desc: &str, start: &str, end: &str) -> SubStep {
    SubStep {
        id: id.to_string(),
        description: desc.to_string(),
        start_time: t(start),
        end_time: t(end),
        ..SubStep::default()
    }
}

pub fn with_crew(mut s: SubStep, role: WorkerRole, count: u32) -> SubStep {
    s.workers.push(WorkerAssignment::new(role, count));
    s
}

pub fn support(mut s: SubStep) -> SubStep {
    s.is_unproductive = true;
    s
}

/// Shift 07:00-17:00, lunch 12:00-13:00, 30 minute windows.
pub fn activity(steps: Vec<SubStep>) -> Activity {
    Activity {
        id: "A-1".to_string(),
        service: "Concrete slab".to_string(),
        unit: "m³".to_string(),
        sub_steps: steps,
        ..Activity::default()
    }
}

/// Unique path in the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("siteflow_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes `content` to a fresh temp file and returns its path.
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

/// The idle-day scenario: one masonry step 07:00-09:00 with 4 masons,
/// 10 m³ planned.
pub const IDLE_DAY_JSON: &str = r#"{
  "id": "A-12",
  "discipline": "Structure",
  "service": "Concrete slab",
  "location": "Block B",
  "date": "2025-03-10",
  "targetQuantity": 10,
  "unit": "m³",
  "shiftStart": "07:00",
  "shiftEnd": "17:00",
  "lunchStart": "12:00",
  "lunchEnd": "13:00",
  "analysisIntervalMinutes": 30,
  "subSteps": [
    {
      "id": 1,
      "description": "Masonry",
      "startTime": "07:00",
      "endTime": "09:00",
      "workers": [{ "role": "Mason", "count": 4 }],
      "machineryCount": 0,
      "isUnproductive": false,
      "unit": "m³"
    }
  ]
}"#;

/// Two overlapping productive steps and a duplicated crew entry.
pub const BOTTLENECK_YAML: &str = r#"
id: A-7
service: Formwork and rebar
unit: m²
targetQuantity: 40
subSteps:
  - id: rebar
    description: Rebar
    startTime: "09:30"
    endTime: "10:30"
    workers:
      - { role: RebarWorker, count: 2 }
      - { role: RebarWorker, count: 1 }
  - id: conc
    description: Concreting
    startTime: "09:00"
    endTime: "10:00"
    workers:
      - { role: Other, customRole: Pump crew, count: 3 }
"#;
