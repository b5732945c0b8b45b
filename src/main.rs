//! Dunesync - Dune Query Sync
//!
//! ローカルのSQLクエリリポジトリと Dune Analytics を同期するCLIツール

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use dunesync::adapter::config::Config;
use dunesync::driver::{Args, QuerySyncWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = QuerySyncWorkflow::new(config);

    workflow.execute(args.command).await
}
