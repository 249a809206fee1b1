//! # Repository Traits
//!
//! 外部への入出力を抽象化するインターフェース
//!
//! - **PuzzleRepository**: パズルファイルの発見と読み込み
//! - **ReportRepository**: レポートの保存

pub mod puzzle_repository;
pub mod report_repository;
