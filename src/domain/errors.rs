//! # Domain Errors
//!
//! ドメイン層のエラー型

use thiserror::Error;

/// 式の解析・評価エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    EmptyInput,
    #[error("expression is {actual_bytes} bytes, limit is {max_bytes}")]
    InputTooLarge {
        max_bytes: usize,
        actual_bytes: usize,
    },
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("expected {expected}, found '{found}' at position {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: usize,
    },
    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },
    #[error("invalid number '{raw}' at position {position}")]
    InvalidNumber { raw: String, position: usize },
    #[error("nesting deeper than {max_depth} at position {position}")]
    NestingTooDeep { max_depth: usize, position: usize },
    #[error("more than {max_operators} operators, limit exceeded at position {position}")]
    TooManyOperators {
        max_operators: usize,
        position: usize,
    },
}

/// パズル定義のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle has no numbers")]
    NoNumbers,
    #[error("puzzle has {count} numbers, limit is {max}")]
    TooManyNumbers { count: usize, max: usize },
    #[error("number {value} at index {index} is negative")]
    NegativeNumber { index: usize, value: i32 },
}
