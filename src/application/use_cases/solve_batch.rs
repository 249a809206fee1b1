//! # Solve Batch Use Case
//!
//! パズルファイルを発見し、全てのパズルを解いてレポートを作成するユースケース

use anyhow::{anyhow, Result};
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::solve_options::SolveOptions;
use crate::application::use_cases::solve_puzzle::SolvePuzzleUseCase;
use crate::domain::entities::report::{ReportMetadata, SolveReport};
use crate::domain::repositories::puzzle_repository::PuzzleRepository;

/// バッチ解決ユースケース
pub struct SolveBatchUseCase<P: PuzzleRepository> {
    puzzle_repository: Arc<P>,
}

impl<P: PuzzleRepository> SolveBatchUseCase<P> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `puzzle_repository` - パズルリポジトリ
    pub fn new(puzzle_repository: Arc<P>) -> Self {
        Self { puzzle_repository }
    }

    /// ディレクトリ内の全パズルを解く
    ///
    /// 読み込めないファイルは警告を出してスキップする。
    /// 探索はブロッキングスレッドプールで実行する
    ///
    /// # Arguments
    ///
    /// * `puzzle_dir` - パズルディレクトリ
    /// * `options` - 探索オプション
    ///
    /// # Errors
    ///
    /// ファイルの発見、または解の検証に失敗した場合にエラーを返す
    pub async fn execute(&self, puzzle_dir: &str, options: &SolveOptions) -> Result<SolveReport> {
        let files = self
            .puzzle_repository
            .discover_puzzle_files(puzzle_dir)
            .await?;

        let mut results = Vec::new();
        for file in &files {
            let puzzles = match self.puzzle_repository.load_puzzles(file).await {
                Ok(puzzles) => puzzles,
                Err(e) => {
                    warn!("Skipping {}: {:#}", file.display(), e);
                    continue;
                }
            };

            let source_file = file.to_string_lossy().to_string();
            for puzzle in puzzles {
                let options = *options;
                let result = tokio::task::spawn_blocking(move || {
                    SolvePuzzleUseCase::new().execute(&puzzle, &options)
                })
                .await
                .map_err(|e| anyhow!("Failed to spawn blocking task: {}", e))??;
                results.push(result.with_source_file(source_file.clone()));
            }
        }

        let metadata = ReportMetadata {
            run_id: uuid::Uuid::new_v4().to_string(),
            hostname: hostname::get()
                .unwrap_or_else(|_| "unknown".into())
                .to_string_lossy()
                .to_string(),
            generated_at: Utc::now(),
            shifts_enabled: options.operators.shifts,
        };
        let report = SolveReport::new(metadata, results);

        info!(
            "Solved {} puzzles from {} files ({} exact)",
            report.len(),
            files.len(),
            report.exact_count()
        );

        Ok(report)
    }
}
