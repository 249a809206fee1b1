//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// `+ - << >>` で目標値を作る数当てパズルのソルバー
#[derive(Parser, Debug, Clone)]
#[command(name = "countdown")]
#[command(about = "Solve numbers puzzles using + - << >>", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Find an expression that reaches the target
    Solve {
        /// Target number
        #[arg(short, long, allow_hyphen_values = true)]
        target: i32,

        /// Available numbers (each used at most once)
        #[arg(required = true, num_args = 1..)]
        numbers: Vec<i32>,

        /// Search with + and - only
        #[arg(long)]
        no_shifts: bool,

        /// Report the closest reachable value when there is no exact match
        #[arg(long)]
        closest: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an expression
    Eval {
        /// Expression, e.g. "(4 << (5 + 2)) - 75"
        expression: String,

        /// Expected value to compare against
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<i32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve every puzzle file in a directory
    Batch {
        /// Puzzle directory (defaults to `puzzle_dir` in the config)
        #[arg(short, long)]
        dir: Option<String>,

        /// Report output path (defaults to `report_path` in the config)
        #[arg(short, long)]
        report: Option<String>,

        /// Dry run mode - don't write the report
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_solve() {
        let args = Args::parse_from(["countdown", "solve", "-t", "437", "75", "100", "5", "2", "2", "4"]);
        assert_eq!(args.config, DEFAULT_CONFIG_PATH);
        assert_eq!(
            args.command,
            Command::Solve {
                target: 437,
                numbers: vec![75, 100, 5, 2, 2, 4],
                no_shifts: false,
                closest: false,
                json: false,
            }
        );
    }

    #[test]
    fn test_args_solve_negative_target() {
        let args = Args::parse_from(["countdown", "solve", "--target", "-3", "1", "4"]);
        assert!(matches!(args.command, Command::Solve { target: -3, .. }));
    }

    #[test]
    fn test_args_solve_requires_numbers() {
        assert!(Args::try_parse_from(["countdown", "solve", "-t", "10"]).is_err());
    }

    #[test]
    fn test_args_solve_flags() {
        let args = Args::parse_from([
            "countdown",
            "solve",
            "-t",
            "16",
            "--no-shifts",
            "--closest",
            "--json",
            "2",
            "3",
        ]);
        assert!(matches!(
            args.command,
            Command::Solve {
                no_shifts: true,
                closest: true,
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn test_args_eval() {
        let args = Args::parse_from(["countdown", "eval", "1 + 2 << 3", "--target", "24"]);
        assert_eq!(
            args.command,
            Command::Eval {
                expression: "1 + 2 << 3".to_string(),
                target: Some(24),
                json: false,
            }
        );
    }

    #[test]
    fn test_args_batch_defaults() {
        let args = Args::parse_from(["countdown", "batch"]);
        assert_eq!(
            args.command,
            Command::Batch {
                dir: None,
                report: None,
                dry_run: false,
            }
        );
    }

    #[test]
    fn test_args_custom_config_after_subcommand() {
        let args = Args::parse_from(["countdown", "batch", "--dry-run", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
        assert!(matches!(args.command, Command::Batch { dry_run: true, .. }));
    }
}
