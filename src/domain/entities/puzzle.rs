//! # Puzzle Entity
//!
//! パズル（目標値と使用可能な数値）と解のドメイン表現

use serde::{Deserialize, Serialize};

use super::expression::Expr;
use crate::domain::errors::PuzzleError;

/// 一つのパズルで扱える数値の上限
///
/// 部分集合探索は数値の個数に対して指数的に増える。8個ではリリースビルドでも数十秒かかる
pub const MAX_NUMBERS: usize = 7;

/// パズル
///
/// 同じ値の数値が複数あっても位置で区別される
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub target: i32,
    pub numbers: Vec<i32>,
}

impl Puzzle {
    /// 新しいパズルを作成
    ///
    /// # Errors
    ///
    /// 数値が空、上限超過、または負の数値を含む場合にエラーを返す
    pub fn new(target: i32, numbers: Vec<i32>) -> Result<Self, PuzzleError> {
        let puzzle = Self {
            name: None,
            target,
            numbers,
        };
        puzzle.validate(MAX_NUMBERS)?;
        Ok(puzzle)
    }

    /// 名前を付ける
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// パズルの妥当性を検証
    ///
    /// `max_numbers` は `MAX_NUMBERS` を超えて緩めることはできない
    pub fn validate(&self, max_numbers: usize) -> Result<(), PuzzleError> {
        if self.numbers.is_empty() {
            return Err(PuzzleError::NoNumbers);
        }
        let max = max_numbers.min(MAX_NUMBERS);
        if self.numbers.len() > max {
            return Err(PuzzleError::TooManyNumbers {
                count: self.numbers.len(),
                max,
            });
        }
        if let Some((index, &value)) = self.numbers.iter().enumerate().find(|(_, n)| **n < 0) {
            return Err(PuzzleError::NegativeNumber { index, value });
        }
        Ok(())
    }

    /// 表示用のラベル
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} from {:?}", self.target, self.numbers),
        }
    }
}

/// 解
///
/// 完全一致しない場合は目標値に最も近い式を保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub expression: Expr,
    pub value: i32,
    pub distance: u64,
}

impl Solution {
    pub fn new(expression: Expr, target: i32) -> Self {
        let value = expression.value();
        Self {
            expression,
            value,
            distance: distance(value, target),
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// 値と目標値の差の絶対値
pub fn distance(value: i32, target: i32) -> u64 {
    (i64::from(value) - i64::from(target)).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::expression::Operator;

    #[test]
    fn test_puzzle_new_valid() {
        let puzzle = Puzzle::new(437, vec![75, 100, 5, 2, 2, 4]).unwrap();
        assert_eq!(puzzle.target, 437);
        assert_eq!(puzzle.numbers.len(), 6);
        assert!(puzzle.name.is_none());
    }

    #[test]
    fn test_puzzle_new_empty_numbers() {
        assert_eq!(Puzzle::new(10, vec![]), Err(PuzzleError::NoNumbers));
    }

    #[test]
    fn test_puzzle_new_negative_number() {
        let result = Puzzle::new(10, vec![1, -2, 3]);
        assert_eq!(
            result,
            Err(PuzzleError::NegativeNumber {
                index: 1,
                value: -2
            })
        );
    }

    #[test]
    fn test_puzzle_new_too_many_numbers() {
        let result = Puzzle::new(10, vec![1; MAX_NUMBERS + 1]);
        assert!(matches!(
            result,
            Err(PuzzleError::TooManyNumbers { count, max }) if count == MAX_NUMBERS + 1 && max == MAX_NUMBERS
        ));
    }

    #[test]
    fn test_puzzle_limit_is_seven_numbers() {
        assert_eq!(MAX_NUMBERS, 7);
        assert!(Puzzle::new(10, vec![75, 100, 50, 25, 3, 7, 9]).is_ok());
        assert!(Puzzle::new(10, vec![75, 100, 50, 25, 3, 7, 9, 6]).is_err());
    }

    #[test]
    fn test_puzzle_validate_cannot_raise_limit() {
        let puzzle = Puzzle {
            name: None,
            target: 10,
            numbers: vec![1; MAX_NUMBERS + 1],
        };
        assert!(matches!(
            puzzle.validate(MAX_NUMBERS + 5),
            Err(PuzzleError::TooManyNumbers { max, .. }) if max == MAX_NUMBERS
        ));
    }

    #[test]
    fn test_puzzle_validate_with_lower_limit() {
        let puzzle = Puzzle::new(10, vec![1, 2, 3, 4]).unwrap();
        assert!(puzzle.validate(4).is_ok());
        assert!(puzzle.validate(3).is_err());
    }

    #[test]
    fn test_puzzle_label() {
        let puzzle = Puzzle::new(7, vec![1, 2]).unwrap();
        assert_eq!(puzzle.label(), "7 from [1, 2]");
        assert_eq!(puzzle.with_name("easy").label(), "easy");
    }

    #[test]
    fn test_puzzle_deserialization_without_name() {
        let puzzle: Puzzle = serde_json::from_str(r#"{"target": 5, "numbers": [2, 3]}"#).unwrap();
        assert_eq!(puzzle.target, 5);
        assert!(puzzle.name.is_none());
    }

    #[test]
    fn test_solution_distance() {
        let exact = Solution::new(
            Expr::binary(Operator::Add, Expr::Number(2), Expr::Number(3)),
            5,
        );
        assert!(exact.is_exact());
        assert_eq!(exact.value, 5);

        let near = Solution::new(Expr::Number(3), 7);
        assert!(!near.is_exact());
        assert_eq!(near.distance, 4);
    }

    #[test]
    fn test_distance_does_not_overflow() {
        assert_eq!(distance(i32::MIN, i32::MAX), u64::from(u32::MAX));
    }
}
