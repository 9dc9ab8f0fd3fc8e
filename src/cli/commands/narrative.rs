use crate::cli::commands::load_activity;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Narrative { file } = cmd {
        let activity = load_activity(file, cfg)?;
        let input = Core::build_narrative(&activity);
        println!("{}", serde_json::to_string_pretty(&input)?);
    }
    Ok(())
}
