use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::normalize_activity;
use crate::errors::AppResult;
use crate::store::{ActivityStore, FileStore, serialize_activity};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Normalize { file, write } = cmd {
        let store = FileStore::open(file)?;
        let normalized = normalize_activity(&store.load()?);

        if *write {
            store.save(&normalized)?;
            success(format!("Activity saved: {}", store.path().display()));
        } else {
            println!("{}", serialize_activity(&normalized, store.format())?);
        }
    }
    Ok(())
}
