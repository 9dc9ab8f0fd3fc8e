use crate::cli::commands::load_activity;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::analyze_flow;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::render_flow;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Flow { file } = cmd {
        let activity = load_activity(file, cfg)?;
        let blocks = analyze_flow(&activity);

        header(
            format!(
                "{} · shift {}-{} · every {} min",
                activity.title(),
                activity.shift_start,
                activity.shift_end,
                activity.effective_interval()
            ),
            cfg.color,
        );
        print!("{}", render_flow(&blocks, cfg));
    }
    Ok(())
}
