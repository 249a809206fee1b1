//! Adapter Layer
//!
//! 外部システム（ファイルシステム、設定ファイル）との統合

pub mod config;
pub mod repositories;
