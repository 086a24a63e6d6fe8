//! JSON ledger persistence under ~/.clarity

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use clarity_core::{Budget, DailyPreset, Transaction};

pub fn clarity_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".clarity"))
}

pub fn ensure_clarity_home() -> Result<PathBuf> {
    let dir = clarity_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn ledger_path() -> Result<PathBuf> {
    Ok(ensure_clarity_home()?.join("ledger.json"))
}

/// Everything the CLI persists: the transaction history, the single
/// optional budget, and the daily presets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub presets: Vec<DailyPreset>,
}

impl Ledger {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Ledger::default());
        }
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&ledger_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&ledger_path()?)
    }
}
