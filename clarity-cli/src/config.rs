//! CLI display configuration under ~/.clarity/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::store::ensure_clarity_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Currency symbol prefixed to printed amounts
    pub currency: String,
    /// Print categorization reasons in `clarity list`
    pub show_reasons: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplaySection {
                currency: "$".to_string(),
                show_reasons: true,
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_clarity_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}
