//! # Domain Layer
//!
//! このモジュールはパズルの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ファイルシステムやCLIについて何も知らない
//! - 純粋なビジネスロジック（探索と評価）
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Expr, Puzzle, SolveReportなど）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（探索と評価）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
