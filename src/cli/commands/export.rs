use crate::cli::commands::load_activity;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        force,
    } = cmd
    {
        let activity = load_activity(file, cfg)?;
        let report = Core::build_report(&activity);
        ExportLogic::export(&report, *format, out, *force)?;
    }
    Ok(())
}
