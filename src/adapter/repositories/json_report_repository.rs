//! JSON Report Repository Implementation
//!
//! ReportRepositoryのJSON実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::entities::report::SolveReport;
use crate::domain::repositories::report_repository::ReportRepository;

/// JSONファイルベースのレポートリポジトリ
pub struct JsonReportRepository;

impl JsonReportRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルにレポートを保存する（同期処理）
    fn save_sync(path: &str, report: &SolveReport) -> Result<()> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create report directory")?;
        }

        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;

        fs::write(path, json).context("Failed to write report file")?;

        info!(
            "Saved report {}: {} results ({} exact)",
            report.metadata.run_id,
            report.len(),
            report.exact_count()
        );

        Ok(())
    }

    /// ファイルからレポートを読み込む（同期処理）
    fn load_sync(path: &str) -> Result<SolveReport> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref()).context("Failed to read report file")?;

        serde_json::from_str(&content).context("Failed to parse report JSON")
    }
}

#[async_trait]
impl ReportRepository for JsonReportRepository {
    async fn save(&self, path: &str, report: &SolveReport) -> Result<()> {
        let path = path.to_string();
        let report = report.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &report))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn load(&self, path: &str) -> Result<SolveReport> {
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for JsonReportRepository {
    fn default() -> Self {
        Self::new()
    }
}
