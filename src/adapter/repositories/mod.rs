//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_puzzle_repository;
pub mod json_report_repository;
