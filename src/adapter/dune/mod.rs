//! Dune API Adapter Modules
//!
//! Dune Analytics REST API統合のためのアダプターモジュール

pub mod client;
pub mod models;
