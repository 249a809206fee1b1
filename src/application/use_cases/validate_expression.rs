//! # Validate Expression Use Case
//!
//! ユーザーが入力した式を評価し、目標値と比較するユースケース

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::services::evaluator;

/// 評価結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// 完全に括弧付けした正規形
    pub expression: String,
    pub value: i32,
    pub target: Option<i32>,
    pub matches: Option<bool>,
}

/// 式検証ユースケース
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateExpressionUseCase;

impl ValidateExpressionUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 式を評価する
    ///
    /// # Errors
    ///
    /// 式の構文が不正な場合にエラーを返す
    pub fn execute(&self, input: &str, target: Option<i32>) -> Result<ValidationOutcome> {
        let expr = evaluator::parse(input).with_context(|| format!("Invalid expression: {}", input))?;
        let value = expr.value();

        Ok(ValidationOutcome {
            expression: expr.to_string(),
            value,
            target,
            matches: target.map(|t| t == value),
        })
    }
}
