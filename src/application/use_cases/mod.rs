//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SolvePuzzleUseCase**: 一つのパズルの探索と検証
//! - **ValidateExpressionUseCase**: 式の評価
//! - **SolveBatchUseCase**: パズルファイルの一括処理

pub mod solve_batch;
pub mod solve_puzzle;
pub mod validate_expression;
