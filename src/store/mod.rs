//! Local stand-in for the persistence collaborator.
//!
//! Activities live in JSON or YAML files; the format is picked from the file
//! extension. The analytics never touch this module, they only get the
//! `Activity` value it returns.

use crate::errors::{AppError, AppResult};
use crate::models::Activity;
use crate::utils::path::{expand_tilde, extension_of};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub trait ActivityStore {
    fn load(&self) -> AppResult<Activity>;
    fn save(&self, activity: &Activity) -> AppResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Yaml,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_deref() {
            Some("json") => Ok(StoreFormat::Json),
            Some("yml") | Some("yaml") => Ok(StoreFormat::Yaml),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// File-backed store for a single activity.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let path = expand_tilde(path);
        let format = StoreFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }
}

/// Renders an activity in the given store format.
pub fn serialize_activity(activity: &Activity, format: StoreFormat) -> AppResult<String> {
    Ok(match format {
        StoreFormat::Json => serde_json::to_string_pretty(activity)?,
        StoreFormat::Yaml => serde_yaml::to_string(activity)?,
    })
}

impl ActivityStore for FileStore {
    fn load(&self) -> AppResult<Activity> {
        let content = fs::read_to_string(&self.path)?;

        let activity: Activity = match self.format {
            StoreFormat::Json => serde_json::from_str(&content)?,
            StoreFormat::Yaml => serde_yaml::from_str(&content)?,
        };

        debug!(
            path = %self.path.display(),
            steps = activity.sub_steps.len(),
            "activity loaded"
        );
        Ok(activity)
    }

    fn save(&self, activity: &Activity) -> AppResult<()> {
        let content = serialize_activity(activity, self.format)?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "activity saved");
        Ok(())
    }
}
