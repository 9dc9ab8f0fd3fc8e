use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// `--interval` from the command line; never written to disk.
    #[serde(skip)]
    pub interval_override: Option<i64>,
}

fn default_color() -> bool {
    true
}
fn default_decimals() -> usize {
    2
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_wrap_width() -> usize {
    60
}

/// Keys a complete config file carries, in file order.
pub const CONFIG_KEYS: [&str; 5] = [
    "color",
    "decimals",
    "log_level",
    "separator_char",
    "wrap_width",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_color(),
            decimals: default_decimals(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
            wrap_width: default_wrap_width(),
            interval_override: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("siteflow")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".siteflow")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("siteflow.conf")
    }

    /// Config path, honouring a `--config` override.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration unless a file already exists.
    /// Returns `true` when a new file was created.
    pub fn init_all(custom: Option<&str>) -> AppResult<bool> {
        let path = Self::resolve_path(custom);

        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(&path, Config::default().to_yaml()?)?;
        Ok(true)
    }
}
