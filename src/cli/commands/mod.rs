pub mod analyze;
pub mod check;
pub mod config;
pub mod export;
pub mod flow;
pub mod init;
pub mod metrics;
pub mod narrative;
pub mod normalize;

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Activity;
use crate::store::{ActivityStore, FileStore};

/// Loads an activity file and applies the `--interval` override, if any.
pub(crate) fn load_activity(file: &str, cfg: &Config) -> AppResult<Activity> {
    let activity = FileStore::open(file)?.load()?;
    Ok(Core::with_interval(&activity, cfg.interval_override))
}
