//! # Countdown
//!
//! 数当てパズルのソルバー。与えられた数値をそれぞれ最大一度ずつ使い、
//! `+`, `-`, `<<`, `>>` を組み合わせて目標値を作る式を探す。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 式木、パズル、探索と評価（外部I/Oなし）
//! - **Application層**: ユースケース（単体の探索、式の評価、一括処理）
//! - **Adapter層**: 設定ファイルとパズル/レポートファイルの入出力
//! - **Driver層**: CLI、依存性注入

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
