//! # Domain Services
//!
//! - **solver**: 目標値を作る式の探索
//! - **evaluator**: 式の文字列の解析と評価

pub mod evaluator;
pub mod solver;
