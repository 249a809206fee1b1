//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: サブコマンドごとのオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::{Args, Command};
pub use workflow::CountdownWorkflow;
