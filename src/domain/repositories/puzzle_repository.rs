//! # Puzzle Repository Trait
//!
//! パズルファイルの発見と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::entities::puzzle::Puzzle;

/// パズルリポジトリ
///
/// パズルファイルの発見と読み込みを担当するリポジトリ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PuzzleRepository: Send + Sync {
    /// パズルファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `puzzle_dir` - パズルディレクトリのパス
    ///
    /// # Returns
    ///
    /// 発見されたパズルファイルのパスのリスト（パス順）
    async fn discover_puzzle_files(&self, puzzle_dir: &str) -> Result<Vec<PathBuf>>;

    /// パズルファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `file_path` - パズルファイルのパス
    ///
    /// # Returns
    ///
    /// ファイルに含まれるパズルのリスト
    ///
    /// # Errors
    ///
    /// 読み込み、パース、または検証に失敗した場合にエラーを返す
    async fn load_puzzles(&self, file_path: &Path) -> Result<Vec<Puzzle>>;
}
