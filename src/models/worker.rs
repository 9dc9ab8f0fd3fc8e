use super::role::WorkerRole;
use serde::{Deserialize, Serialize};

/// A crew of `count` workers of one trade assigned to a sub-step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorkerAssignmentWire", into = "WorkerAssignmentWire")]
pub struct WorkerAssignment {
    pub role: WorkerRole,
    pub count: u32,
}

impl WorkerAssignment {
    pub fn new(role: WorkerRole, count: u32) -> Self {
        Self { role, count }
    }

    pub fn role_name(&self) -> &str {
        self.role.display_name()
    }
}

/// Stored shape: `{ "role": "Other", "customRole": "Scaffolder", "count": 2 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkerAssignmentWire {
    #[serde(default = "default_role_code")]
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_role: Option<String>,
    #[serde(default)]
    count: u32,
}

fn default_role_code() -> String {
    WorkerRole::Laborer.code().to_string()
}

impl From<WorkerAssignmentWire> for WorkerAssignment {
    fn from(w: WorkerAssignmentWire) -> Self {
        Self {
            role: WorkerRole::from_parts(&w.role, w.custom_role.as_deref()),
            count: w.count,
        }
    }
}

impl From<WorkerAssignment> for WorkerAssignmentWire {
    fn from(a: WorkerAssignment) -> Self {
        Self {
            role: a.role.code().to_string(),
            custom_role: a.role.custom_name().map(str::to_string),
            count: a.count,
        }
    }
}

/// Collapse assignments sharing the same effective role name by summing
/// their counts. First-seen order is kept.
pub fn merge_assignments(workers: &[WorkerAssignment]) -> Vec<WorkerAssignment> {
    let mut merged: Vec<WorkerAssignment> = Vec::with_capacity(workers.len());

    for w in workers {
        match merged
            .iter_mut()
            .find(|m| m.role_name() == w.role_name())
        {
            Some(existing) => existing.count += w.count,
            None => merged.push(w.clone()),
        }
    }

    merged
}
