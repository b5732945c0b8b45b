//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// ローカルのSQLリポジトリと Dune Analytics を同期するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "dunesync")]
#[command(about = "Sync SQL queries between a local repository and Dune Analytics", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(short, long, global = true, default_value = "./configs/queries.yml")]
    pub config: String,
}

/// 実行するコマンド
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download configured queries from Dune into the local queries directory
    Pull,

    /// Upload local SQL files back to Dune
    Push,

    /// Fetch the latest cached result of a query and display rows
    Run {
        /// Query ID (omit to select from an interactive menu)
        query_id: Option<u64>,

        /// Maximum number of rows to display (default: 10)
        limit: Option<usize>,
    },

    /// Print every row of the latest cached result, unformatted
    Latest {
        /// Query ID
        query_id: u64,
    },
}
