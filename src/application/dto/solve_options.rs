//! # SolveOptions DTO
//!
//! 探索の設定を保持するDTO

use serde::{Deserialize, Serialize};

use crate::domain::services::solver::OperatorSet;

/// 探索オプション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOptions {
    pub operators: OperatorSet,
    /// 完全一致がない場合に最も近い値の式を採用する
    pub closest_fallback: bool,
    /// 見つかった式を評価器で再評価する
    pub verify: bool,
}

impl SolveOptions {
    pub fn new(operators: OperatorSet, closest_fallback: bool, verify: bool) -> Self {
        Self {
            operators,
            closest_fallback,
            verify,
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new(OperatorSet::all(), false, true)
    }
}
