use crate::cli::commands::load_activity;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::{render_flow, render_metrics};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { file, json } = cmd {
        let activity = load_activity(file, cfg)?;
        let report = Core::build_report(&activity);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        header(activity.title(), cfg.color);
        print!("{}", render_metrics(&report.metrics, &activity.unit, cfg));

        println!(
            "\nFlow ({}-{}, every {} min):",
            activity.shift_start,
            activity.shift_end,
            activity.effective_interval()
        );
        print!("{}", render_flow(&report.blocks, cfg));
    }
    Ok(())
}
