//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::entities::puzzle::MAX_NUMBERS;

pub const DEFAULT_CONFIG_PATH: &str = "./.countdown/config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// `<<` と `>>` を探索に含める
    pub enable_shifts: bool,
    /// 完全一致がない場合に最も近い値を返す
    pub closest_fallback: bool,
    /// 見つかった式を評価器で再評価して検証する
    pub verify_solutions: bool,
    pub max_numbers: usize,

    pub puzzle_dir: String,
    pub report_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_shifts: true,
            closest_fallback: false,
            verify_solutions: true,
            max_numbers: 6,
            puzzle_dir: "./puzzles".to_string(),
            report_path: "./.countdown/report.json".to_string(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが存在しない場合はデフォルト設定を返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_numbers == 0 || self.max_numbers > MAX_NUMBERS {
            bail!(
                "max_numbers must be between 1 and {}, got {}",
                MAX_NUMBERS,
                self.max_numbers
            );
        }
        Ok(())
    }
}
