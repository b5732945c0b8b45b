//! Adapter Layer
//!
//! 外部システム（Dune API, ファイルシステム）との統合

pub mod auth;
pub mod config;
pub mod dune;
pub mod repositories;
