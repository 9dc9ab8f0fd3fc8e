use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::validate_activity;
use crate::errors::{AppError, AppResult};
use crate::store::{ActivityStore, FileStore};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Check { file } = cmd {
        // Validate what is on disk, without command-line overrides.
        let activity = FileStore::open(file)?.load()?;
        let issues = validate_activity(&activity);

        if issues.is_empty() {
            success(format!("{}: no issues found", activity.title()));
            return Ok(());
        }

        for issue in &issues {
            warning(issue);
        }
        return Err(AppError::Validation(issues.len()));
    }
    Ok(())
}
