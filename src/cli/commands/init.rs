use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the config directory and a default
/// configuration file (an existing file is left alone).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if Config::init_all(cli.config.as_deref())? {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }

    Ok(())
}
