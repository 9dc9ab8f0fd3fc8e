use crate::cli::commands::load_activity;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_metrics;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::render_metrics;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Metrics { file } = cmd {
        let activity = load_activity(file, cfg)?;
        let metrics = compute_metrics(&activity);

        header(activity.title(), cfg.color);
        print!("{}", render_metrics(&metrics, &activity.unit, cfg));
    }
    Ok(())
}
