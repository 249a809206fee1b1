//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Expr / Operator**: 式木と二項演算子
//! - **Puzzle / Solution**: パズルと解
//! - **SolveReport**: バッチ実行結果のレポート

pub mod expression;
pub mod puzzle;
pub mod report;
