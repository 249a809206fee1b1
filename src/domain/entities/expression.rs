//! # Expression Entity
//!
//! 演算子と式木のドメイン表現

use serde::{Deserialize, Serialize};
use std::fmt;

/// 二項演算子
///
/// 32ビット整数の2の補数演算。加減算はラップし、シフト量は下位5ビットのみ使用する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Shl,
    Shr,
}

impl Operator {
    /// 演算を適用する
    ///
    /// # Arguments
    ///
    /// * `lhs` - 左オペランド
    /// * `rhs` - 右オペランド
    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operator::Add => lhs.wrapping_add(rhs),
            Operator::Sub => lhs.wrapping_sub(rhs),
            // wrapping_shl/shr mask the shift amount to the low 5 bits
            Operator::Shl => lhs.wrapping_shl(rhs as u32),
            Operator::Shr => lhs.wrapping_shr(rhs as u32),
        }
    }

    /// 優先順位（大きいほど強く結合する）
    ///
    /// 加減算はシフトより強く結合する
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Shl | Operator::Shr => 1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 式木
///
/// 葉は入力された数値、内部ノードは二項演算
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i32),
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// 二項演算ノードを作成
    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// 式を評価する
    pub fn value(&self) -> i32 {
        match self {
            Expr::Number(n) => *n,
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.value(), rhs.value()),
        }
    }

    /// 左から順に葉の数値を返す
    pub fn numbers(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.collect_numbers(&mut out);
        out
    }

    fn collect_numbers(&self, out: &mut Vec<i32>) {
        match self {
            Expr::Number(n) => out.push(*n),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_numbers(out);
                rhs.collect_numbers(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
