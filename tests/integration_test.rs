//! Integration tests for countdown
//!
//! These tests verify end-to-end functionality against the puzzle fixtures.

use std::path::PathBuf;

use countdown::adapter::repositories::file_puzzle_repository::FilePuzzleRepository;
use countdown::domain::entities::puzzle::Puzzle;
use countdown::domain::repositories::puzzle_repository::PuzzleRepository;
use countdown::domain::services::evaluator::evaluate;
use countdown::domain::services::solver::{OperatorSet, SolverService};

/// Get the path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("puzzles")
}

#[test]
fn test_provided_example() {
    let target = 437;
    let puzzle = Puzzle::new(target, vec![75, 100, 5, 2, 2, 4]).unwrap();

    let solution = SolverService::default()
        .find_solution(&puzzle)
        .expect("437 should be reachable");

    let evaluated = evaluate(&solution.to_string()).unwrap();
    assert_eq!(
        target, evaluated,
        "evaluated expression should be equal to target"
    );
}

#[test]
fn test_arithmetic_only_classic_puzzle() {
    // 75 + 100 + 5 + 2 + 2 + 4 = 188 is the largest sum
    let puzzle = Puzzle::new(188, vec![75, 100, 5, 2, 2, 4]).unwrap();
    let solver = SolverService::new(OperatorSet::arithmetic());

    let solution = solver.find_solution(&puzzle).unwrap();
    assert_eq!(solution.value(), 188);
    assert_eq!(solution.numbers().len(), 6);

    let too_big = Puzzle::new(189, vec![75, 100, 5, 2, 2, 4]).unwrap();
    assert!(solver.find_solution(&too_big).is_none());
}

#[tokio::test]
async fn test_fixture_puzzles_load_and_solve() {
    let repo = FilePuzzleRepository::default();
    let files = repo
        .discover_puzzle_files(fixtures_path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(files.len(), 2, "classic.json and small.json should be found");

    let solver = SolverService::default();
    let mut solved = Vec::new();
    for file in &files {
        for puzzle in repo.load_puzzles(file).await.unwrap() {
            let solution = solver.find_solution(&puzzle);
            if let Some(expr) = &solution {
                assert_eq!(evaluate(&expr.to_string()).unwrap(), puzzle.target);
            }
            solved.push((puzzle.name.clone().unwrap(), solution.is_some()));
        }
    }

    assert_eq!(
        solved,
        vec![
            ("classic".to_string(), true),
            ("direct".to_string(), true),
            ("shift".to_string(), true),
            ("unreachable".to_string(), false),
        ]
    );
}
