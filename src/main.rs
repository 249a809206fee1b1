//! Countdown - Numbers Puzzle Solver
//!
//! `+ - << >>` で目標値を作る式を探すCLI

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use countdown::adapter::config::Config;
use countdown::driver::{Args, CountdownWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    let workflow = CountdownWorkflow::new(config);

    workflow.execute(args).await
}
