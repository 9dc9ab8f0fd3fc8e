use std::fmt;

/// Trade of a crew assignment.
///
/// The fixed vocabulary covers the usual site trades; `Other` carries the
/// free-text name typed by the user, so resource summaries always key on a
/// well-defined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkerRole {
    #[default]
    Laborer,
    Mason,
    Carpenter,
    RebarWorker,
    Foreman,
    Welder,
    Operator,
    Driver,
    Other(String),
}

impl WorkerRole {
    /// Wire label of the role (`"Other"` for custom roles).
    pub fn code(&self) -> &'static str {
        match self {
            WorkerRole::Laborer => "Laborer",
            WorkerRole::Mason => "Mason",
            WorkerRole::Carpenter => "Carpenter",
            WorkerRole::RebarWorker => "RebarWorker",
            WorkerRole::Foreman => "Foreman",
            WorkerRole::Welder => "Welder",
            WorkerRole::Operator => "Operator",
            WorkerRole::Driver => "Driver",
            WorkerRole::Other(_) => "Other",
        }
    }

    /// Effective role name, used as the resource summary key.
    /// A custom role with a missing name yields `""`.
    pub fn display_name(&self) -> &str {
        match self {
            WorkerRole::Other(name) => name.as_str(),
            fixed => fixed.code(),
        }
    }

    /// Rebuild a role from the `(role, customRole)` pair stored on the wire.
    ///
    /// Matching is case-insensitive. A custom name is kept exactly as given
    /// (it is the resource summary key). An unknown label is kept as a custom
    /// role with that label as its name, so no input is ever lost.
    pub fn from_parts(role: &str, custom_role: Option<&str>) -> Self {
        match role.trim().to_lowercase().as_str() {
            "laborer" => WorkerRole::Laborer,
            "mason" => WorkerRole::Mason,
            "carpenter" => WorkerRole::Carpenter,
            "rebarworker" | "rebar_worker" | "rebar worker" => WorkerRole::RebarWorker,
            "foreman" => WorkerRole::Foreman,
            "welder" => WorkerRole::Welder,
            "operator" => WorkerRole::Operator,
            "driver" => WorkerRole::Driver,
            "other" => WorkerRole::Other(custom_role.unwrap_or_default().to_string()),
            _ => WorkerRole::Other(role.to_string()),
        }
    }

    /// Custom name as stored in `customRole` (only for `Other`).
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            WorkerRole::Other(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, WorkerRole::Other(_))
    }
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_role_uses_its_name() {
        let r = WorkerRole::from_parts("Other", Some("Scaffolder"));
        assert_eq!(r.display_name(), "Scaffolder");
        assert_eq!(r.code(), "Other");
    }

    #[test]
    fn custom_name_is_kept_verbatim() {
        let r = WorkerRole::from_parts("Other", Some(" Scaffolder "));
        assert_eq!(r.display_name(), " Scaffolder ");
    }

    #[test]
    fn custom_role_without_name_is_empty_key() {
        assert_eq!(WorkerRole::from_parts("Other", None).display_name(), "");
    }

    #[test]
    fn fixed_roles_ignore_custom_name() {
        let r = WorkerRole::from_parts("mason", Some("ignored"));
        assert_eq!(r, WorkerRole::Mason);
        assert_eq!(r.display_name(), "Mason");
    }
}
