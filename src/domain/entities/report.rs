//! # SolveReport Entity
//!
//! バッチ実行結果のレポート

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::puzzle::{Puzzle, Solution};

/// 一つのパズルの結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    pub name: Option<String>,
    pub source_file: Option<String>,
    pub target: i32,
    pub numbers: Vec<i32>,
    /// 見つかった式（完全一致、または最も近い値）
    pub expression: Option<String>,
    pub value: Option<i32>,
    pub distance: Option<u64>,
    pub exact: bool,
    /// 評価器による検証結果（検証しなかった場合は `None`）
    pub verified: Option<bool>,
    pub elapsed_ms: u64,
}

impl PuzzleResult {
    /// 解から結果を作成
    ///
    /// # Arguments
    ///
    /// * `puzzle` - 解いたパズル
    /// * `solution` - 見つかった解（採用しない場合は `None`）
    /// * `verified` - 検証結果
    /// * `elapsed_ms` - 探索にかかった時間
    pub fn new(
        puzzle: &Puzzle,
        solution: Option<&Solution>,
        verified: Option<bool>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            name: puzzle.name.clone(),
            source_file: None,
            target: puzzle.target,
            numbers: puzzle.numbers.clone(),
            expression: solution.map(|s| s.expression.to_string()),
            value: solution.map(|s| s.value),
            distance: solution.map(|s| s.distance),
            exact: solution.is_some_and(Solution::is_exact),
            verified,
            elapsed_ms,
        }
    }

    pub fn with_source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }
}

/// レポートのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub run_id: String,
    pub hostname: String,
    pub generated_at: DateTime<Utc>,
    pub shifts_enabled: bool,
}

/// バッチ実行のレポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    #[serde(flatten)]
    pub metadata: ReportMetadata,
    pub results: Vec<PuzzleResult>,
}

impl SolveReport {
    pub fn new(metadata: ReportMetadata, results: Vec<PuzzleResult>) -> Self {
        Self { metadata, results }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 完全一致した件数
    pub fn exact_count(&self) -> usize {
        self.results.iter().filter(|r| r.exact).count()
    }
}
