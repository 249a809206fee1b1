//! # Report Repository Trait
//!
//! レポートの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::report::SolveReport;

/// レポートリポジトリ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レポートを保存する
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, report: &SolveReport) -> Result<()>;

    /// 保存済みのレポートを読み込む
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、またはパースに失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> Result<SolveReport>;
}
