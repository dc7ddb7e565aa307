//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the user config file
//! (`~/.config/codemint/config.json`, or the path given via `--config`),
//! then `CODEMINT_*` environment variables. A missing file is fine; an
//! unreadable or unparsable one the user pointed at explicitly is an error.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://codemint.app";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub profile: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: "default".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Explicit config file path; when unset the default location is used.
    pub config_path: Option<PathBuf>,
}

pub fn load(opts: &LoadOptions) -> Result<Config> {
    let mut config = Config::default();

    let explicit = opts.config_path.is_some();
    let path = opts.config_path.clone().or_else(default_config_path);
    if let Some(path) = path {
        match fs::read_to_string(&path) {
            Ok(raw) => {
                config = serde_json::from_str(&raw)
                    .with_context(|| format!("invalid config file {}", path.display()))?;
            }
            Err(err) if explicit => {
                return Err(err).with_context(|| format!("read config file {}", path.display()));
            }
            Err(_) => {}
        }
    }

    if let Ok(value) = std::env::var("CODEMINT_BASE_URL")
        && !value.is_empty()
    {
        config.base_url = value;
    }
    if let Ok(value) = std::env::var("CODEMINT_PROFILE")
        && !value.is_empty()
    {
        config.profile = value;
    }
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codemint").join("config.json"))
}
