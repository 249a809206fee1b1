//! File Puzzle Repository Implementation
//!
//! PuzzleRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::puzzle::{Puzzle, MAX_NUMBERS};
use crate::domain::repositories::puzzle_repository::PuzzleRepository;

/// パズルファイルの形式（単一のパズル、またはパズルの配列）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PuzzleFile {
    Many(Vec<Puzzle>),
    One(Puzzle),
}

/// ファイルシステムベースのパズルリポジトリ
pub struct FilePuzzleRepository {
    max_numbers: usize,
}

impl FilePuzzleRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `max_numbers` - 一つのパズルで許可する数値の個数
    pub fn new(max_numbers: usize) -> Self {
        Self { max_numbers }
    }

    /// パズルファイルを発見する（内部実装）
    fn discover_puzzle_files_internal(puzzle_dir: &str) -> Result<Vec<PathBuf>> {
        let expanded_path = shellexpand::tilde(puzzle_dir);
        let puzzle_dir = PathBuf::from(expanded_path.as_ref());

        if !puzzle_dir.exists() {
            warn!("Puzzle directory does not exist: {}", puzzle_dir.display());
            return Ok(Vec::new());
        }

        let mut puzzle_files: Vec<PathBuf> = WalkDir::new(&puzzle_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect();
        puzzle_files.sort();

        info!(
            "Found {} puzzle files in {}",
            puzzle_files.len(),
            puzzle_dir.display()
        );

        Ok(puzzle_files)
    }

    /// パズルファイルを読み込んで検証する（内部実装）
    fn load_puzzles_internal(file_path: &Path, max_numbers: usize) -> Result<Vec<Puzzle>> {
        let content = fs::read_to_string(file_path)
            .context(format!("Failed to read puzzle file: {}", file_path.display()))?;

        let puzzles = match serde_json::from_str::<PuzzleFile>(&content)
            .context(format!("Failed to parse puzzle file: {}", file_path.display()))?
        {
            PuzzleFile::Many(puzzles) => puzzles,
            PuzzleFile::One(puzzle) => vec![puzzle],
        };

        for (index, puzzle) in puzzles.iter().enumerate() {
            puzzle.validate(max_numbers).context(format!(
                "Invalid puzzle #{} in {}",
                index + 1,
                file_path.display()
            ))?;
        }

        Ok(puzzles)
    }
}

#[async_trait]
impl PuzzleRepository for FilePuzzleRepository {
    async fn discover_puzzle_files(&self, puzzle_dir: &str) -> Result<Vec<PathBuf>> {
        let puzzle_dir = puzzle_dir.to_string();
        tokio::task::spawn_blocking(move || Self::discover_puzzle_files_internal(&puzzle_dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn load_puzzles(&self, file_path: &Path) -> Result<Vec<Puzzle>> {
        let file_path = file_path.to_path_buf();
        let max_numbers = self.max_numbers;
        tokio::task::spawn_blocking(move || Self::load_puzzles_internal(&file_path, max_numbers))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FilePuzzleRepository {
    fn default() -> Self {
        Self::new(MAX_NUMBERS)
    }
}
