//! Workflow Orchestration
//!
//! サブコマンドごとのワークフロー

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_puzzle_repository::FilePuzzleRepository;
use crate::adapter::repositories::json_report_repository::JsonReportRepository;
use crate::application::dto::solve_options::SolveOptions;
use crate::application::use_cases::solve_batch::SolveBatchUseCase;
use crate::application::use_cases::solve_puzzle::SolvePuzzleUseCase;
use crate::application::use_cases::validate_expression::{
    ValidateExpressionUseCase, ValidationOutcome,
};
use crate::domain::entities::puzzle::Puzzle;
use crate::domain::entities::report::PuzzleResult;
use crate::domain::repositories::report_repository::ReportRepository;
use crate::domain::services::solver::OperatorSet;

use super::cli::{Args, Command};

/// 結果を一行で表示する
pub fn format_result(result: &PuzzleResult) -> String {
    match (&result.expression, result.value) {
        (Some(expression), Some(value)) if result.exact => {
            format!("{} = {}", expression, value)
        }
        (Some(expression), Some(value)) => format!(
            "{} = {} (closest, off by {})",
            expression,
            value,
            result.distance.unwrap_or_default()
        ),
        _ => format!("No solution for {}", result.target),
    }
}

/// 式の評価結果を一行で表示する
pub fn format_outcome(outcome: &ValidationOutcome) -> String {
    match (outcome.target, outcome.matches) {
        (Some(target), Some(true)) => {
            format!("{} = {} (matches {})", outcome.expression, outcome.value, target)
        }
        (Some(target), _) => format!(
            "{} = {} (expected {})",
            outcome.expression, outcome.value, target
        ),
        (None, _) => format!("{} = {}", outcome.expression, outcome.value),
    }
}

/// Countdown Workflow
pub struct CountdownWorkflow {
    config: Config,
    report_repository: Arc<dyn ReportRepository>,
}

impl CountdownWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self::with_report_repository(config, Arc::new(JsonReportRepository::new()))
    }

    /// レポートの保存先を差し替えて作成する
    pub fn with_report_repository(
        config: Config,
        report_repository: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            config,
            report_repository,
        }
    }

    fn options(&self, no_shifts: bool, closest: bool) -> SolveOptions {
        let operators = if self.config.enable_shifts && !no_shifts {
            OperatorSet::all()
        } else {
            OperatorSet::arithmetic()
        };
        SolveOptions::new(
            operators,
            closest || self.config.closest_fallback,
            self.config.verify_solutions,
        )
    }

    /// Execute the selected subcommand
    pub async fn execute(&self, args: Args) -> Result<()> {
        match args.command {
            Command::Solve {
                target,
                numbers,
                no_shifts,
                closest,
                json,
            } => self.solve(target, numbers, self.options(no_shifts, closest), json),
            Command::Eval {
                expression,
                target,
                json,
            } => self.eval(&expression, target, json),
            Command::Batch {
                dir,
                report,
                dry_run,
            } => self.batch(dir, report, dry_run).await,
        }
    }

    fn solve(&self, target: i32, numbers: Vec<i32>, options: SolveOptions, json: bool) -> Result<()> {
        let puzzle = Puzzle {
            name: None,
            target,
            numbers,
        };
        puzzle
            .validate(self.config.max_numbers)
            .context("Invalid puzzle")?;

        info!(
            "Solving {} (shifts: {})",
            puzzle.label(),
            options.operators.shifts
        );
        let result = SolvePuzzleUseCase::new().execute(&puzzle, &options)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("✓ Target: {}, numbers: {:?}", puzzle.target, puzzle.numbers);
            println!("{}", format_result(&result));
        }
        Ok(())
    }

    fn eval(&self, expression: &str, target: Option<i32>, json: bool) -> Result<()> {
        let outcome = ValidateExpressionUseCase::new().execute(expression, target)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}", format_outcome(&outcome));
        }
        Ok(())
    }

    async fn batch(&self, dir: Option<String>, report: Option<String>, dry_run: bool) -> Result<()> {
        let puzzle_dir = dir.unwrap_or_else(|| self.config.puzzle_dir.clone());
        let report_path = report.unwrap_or_else(|| self.config.report_path.clone());
        let options = self.options(false, false);

        info!("Starting batch solve in {}", puzzle_dir);
        info!("Dry run: {}", dry_run);

        let puzzle_repository = Arc::new(FilePuzzleRepository::new(self.config.max_numbers));
        let use_case = SolveBatchUseCase::new(puzzle_repository);
        let solve_report = use_case.execute(&puzzle_dir, &options).await?;

        println!(
            "✓ Solved {} puzzles ({} exact)",
            solve_report.len(),
            solve_report.exact_count()
        );
        for result in &solve_report.results {
            let name = result.name.clone().unwrap_or_else(|| result.target.to_string());
            println!("    - {}: {}", name, format_result(result));
        }

        if solve_report.is_empty() {
            println!("No puzzles found in {}. Exiting.", puzzle_dir);
            return Ok(());
        }

        if dry_run {
            println!("✓ Dry-run mode (report not written)");
        } else {
            self.report_repository
                .save(&report_path, &solve_report)
                .await?;
            println!("✓ Report written to {}", report_path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::report_repository::MockReportRepository;
    use std::fs;
    use tempfile::TempDir;

    fn puzzle_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("one.json"),
            r#"{"name": "one", "target": 16, "numbers": [2, 3]}"#,
        )
        .unwrap();
        temp_dir
    }

    fn result(expression: Option<&str>, value: Option<i32>, distance: Option<u64>) -> PuzzleResult {
        PuzzleResult {
            name: None,
            source_file: None,
            target: 10,
            numbers: vec![2, 3],
            expression: expression.map(str::to_string),
            value,
            distance,
            exact: distance == Some(0),
            verified: None,
            elapsed_ms: 0,
        }
    }

    #[test]
    fn test_format_result_exact() {
        let r = result(Some("(7 + 3)"), Some(10), Some(0));
        assert_eq!(format_result(&r), "(7 + 3) = 10");
    }

    #[test]
    fn test_format_result_closest() {
        let r = result(Some("(2 + 3)"), Some(5), Some(5));
        assert_eq!(format_result(&r), "(2 + 3) = 5 (closest, off by 5)");
    }

    #[test]
    fn test_format_result_none() {
        let r = result(None, None, None);
        assert_eq!(format_result(&r), "No solution for 10");
    }

    #[test]
    fn test_format_outcome() {
        let outcome = ValidationOutcome {
            expression: "(2 + 2)".to_string(),
            value: 4,
            target: Some(5),
            matches: Some(false),
        };
        assert_eq!(format_outcome(&outcome), "(2 + 2) = 4 (expected 5)");

        let outcome = ValidationOutcome {
            target: None,
            matches: None,
            ..outcome
        };
        assert_eq!(format_outcome(&outcome), "(2 + 2) = 4");
    }

    #[test]
    fn test_options_respect_config() {
        let config = Config {
            enable_shifts: false,
            closest_fallback: true,
            ..Config::default()
        };
        let workflow = CountdownWorkflow::new(config);
        let options = workflow.options(false, false);

        assert!(!options.operators.shifts);
        assert!(options.closest_fallback);
        assert!(options.verify);
    }

    #[test]
    fn test_options_flags_override() {
        let workflow = CountdownWorkflow::new(Config::default());

        assert!(!workflow.options(true, false).operators.shifts);
        assert!(workflow.options(false, true).closest_fallback);
        assert!(workflow.options(false, false).operators.shifts);
    }

    #[tokio::test]
    async fn test_batch_saves_report_to_configured_path() {
        let temp_dir = puzzle_dir();
        let config = Config {
            puzzle_dir: temp_dir.path().to_str().unwrap().to_string(),
            report_path: "/reports/out.json".to_string(),
            ..Config::default()
        };

        let mut repo = MockReportRepository::new();
        repo.expect_save()
            .times(1)
            .withf(|path, report| {
                path.to_string() == "/reports/out.json"
                    && report.len() == 1
                    && report.exact_count() == 1
            })
            .returning(|_, _| Ok(()));

        let workflow = CountdownWorkflow::with_report_repository(config, Arc::new(repo));
        workflow.batch(None, None, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_batch_report_flag_overrides_config() {
        let temp_dir = puzzle_dir();
        let config = Config {
            puzzle_dir: temp_dir.path().to_str().unwrap().to_string(),
            ..Config::default()
        };

        let mut repo = MockReportRepository::new();
        repo.expect_save()
            .times(1)
            .withf(|path, _| path.to_string() == "/elsewhere/report.json")
            .returning(|_, _| Ok(()));

        let workflow = CountdownWorkflow::with_report_repository(config, Arc::new(repo));
        workflow
            .batch(None, Some("/elsewhere/report.json".to_string()), false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_batch_dry_run_does_not_save() {
        let temp_dir = puzzle_dir();
        let mut repo = MockReportRepository::new();
        repo.expect_save().never();

        let workflow = CountdownWorkflow::with_report_repository(Config::default(), Arc::new(repo));
        workflow
            .batch(Some(temp_dir.path().to_str().unwrap().to_string()), None, true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_batch_empty_dir_does_not_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = MockReportRepository::new();
        repo.expect_save().never();

        let workflow = CountdownWorkflow::with_report_repository(Config::default(), Arc::new(repo));
        workflow
            .batch(Some(temp_dir.path().to_str().unwrap().to_string()), None, false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_batch_propagates_save_error() {
        let temp_dir = puzzle_dir();
        let mut repo = MockReportRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));

        let workflow = CountdownWorkflow::with_report_repository(Config::default(), Arc::new(repo));
        let err = workflow
            .batch(Some(temp_dir.path().to_str().unwrap().to_string()), None, false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
