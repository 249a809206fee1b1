//! # Solve Puzzle Use Case
//!
//! 一つのパズルを解いて検証するユースケース

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::time::Instant;

use crate::application::dto::solve_options::SolveOptions;
use crate::domain::entities::puzzle::Puzzle;
use crate::domain::entities::report::PuzzleResult;
use crate::domain::services::evaluator;
use crate::domain::services::solver::SolverService;

/// パズル解決ユースケース
#[derive(Debug, Clone, Copy, Default)]
pub struct SolvePuzzleUseCase;

impl SolvePuzzleUseCase {
    pub fn new() -> Self {
        Self
    }

    /// パズルを解く
    ///
    /// # Arguments
    ///
    /// * `puzzle` - 解くパズル
    /// * `options` - 探索オプション
    ///
    /// # Returns
    ///
    /// 結果。解が見つからない場合は `expression` が `None`
    ///
    /// # Errors
    ///
    /// 見つかった式の再評価が一致しない場合にエラーを返す
    pub fn execute(&self, puzzle: &Puzzle, options: &SolveOptions) -> Result<PuzzleResult> {
        let solver = SolverService::new(options.operators);

        let started = Instant::now();
        let solution = solver.solve(puzzle);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let solution = solution.filter(|s| s.is_exact() || options.closest_fallback);

        let verified = match &solution {
            Some(solution) if options.verify => {
                let text = solution.expression.to_string();
                let value = evaluator::evaluate(&text)
                    .with_context(|| format!("Solver produced an unparsable expression: {}", text))?;
                if value != solution.value {
                    bail!(
                        "Verification failed for {}: evaluated to {}, expected {}",
                        text,
                        value,
                        solution.value
                    );
                }
                debug!("Verified {} = {}", text, value);
                Some(true)
            }
            _ => None,
        };

        match &solution {
            Some(s) if s.is_exact() => info!("Solved {} in {}ms", puzzle.label(), elapsed_ms),
            Some(s) => info!(
                "No exact solution for {}, closest is {} (off by {})",
                puzzle.label(),
                s.value,
                s.distance
            ),
            None => info!("No solution for {}", puzzle.label()),
        }

        Ok(PuzzleResult::new(
            puzzle,
            solution.as_ref(),
            verified,
            elapsed_ms,
        ))
    }
}
