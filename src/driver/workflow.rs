//! Workflow Orchestration
//!
//! コマンドごとのオーケストレーションと依存性注入

use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::adapter::auth;
use crate::adapter::config::Config;
use crate::adapter::dune::client::DuneClient;
use crate::adapter::repositories::dune_query_repository::DuneQueryRepository;
use crate::adapter::repositories::fs_query_file_repository::FsQueryFileRepository;
use crate::application::use_cases::fetch_result::FetchResultUseCase;
use crate::application::use_cases::pull_queries::PullQueriesUseCase;
use crate::application::use_cases::push_queries::PushQueriesUseCase;
use crate::domain::entities::query::query_url;
use crate::domain::repositories::query_repository::QueryRepository;

use super::cli::Command;
use super::display;
use super::menu::{self, Selection, DEFAULT_ROW_LIMIT};

/// Query Sync Workflow
pub struct QuerySyncWorkflow {
    config: Config,
}

impl QuerySyncWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the selected command
    pub async fn execute(&self, command: Command) -> Result<()> {
        info!("Starting dunesync...");

        let query_repo = Arc::new(self.build_query_repository()?);

        match command {
            Command::Pull => self.pull(query_repo).await,
            Command::Push => self.push(query_repo).await,
            Command::Run { query_id, limit } => self.run(query_repo, query_id, limit).await,
            Command::Latest { query_id } => self.latest(query_repo, query_id).await,
        }
    }

    /// Create the Dune-backed repository with resolved credentials
    fn build_query_repository(&self) -> Result<DuneQueryRepository> {
        let api_key = auth::resolve_api_key(&self.config.api_key_env, &self.config.env_file)?;
        let client = DuneClient::new(api_key, self.config.api_base_url.clone())?;

        Ok(DuneQueryRepository::new(client))
    }

    /// 設定された全クエリをローカルへ取得する
    async fn pull(&self, query_repo: Arc<DuneQueryRepository>) -> Result<()> {
        if self.config.queries.is_empty() {
            println!("No queries found in configuration");
            return Ok(());
        }

        let file_repo = Arc::new(FsQueryFileRepository::new());
        let use_case = PullQueriesUseCase::new(query_repo, file_repo);

        println!("Pulling {} queries from Dune...\n", self.config.queries.len());

        let queries_dir = auth::expand_path(&self.config.queries_dir);
        let report = use_case.execute(&self.config.queries, &queries_dir).await?;

        if report.is_success() {
            println!("Done!");
        } else {
            println!(
                "Done! Pulled {} of {} queries ({} failed).",
                report.synced_count(),
                self.config.queries.len(),
                report.failed_count()
            );
        }

        Ok(())
    }

    /// ローカルの全ファイルをリモートへ反映する
    async fn push(&self, query_repo: Arc<DuneQueryRepository>) -> Result<()> {
        if self.config.queries.is_empty() {
            println!("No queries found in configuration");
            return Ok(());
        }

        let file_repo = Arc::new(FsQueryFileRepository::new());
        let use_case = PushQueriesUseCase::new(query_repo, file_repo);

        let queries_dir = auth::expand_path(&self.config.queries_dir);
        let report = use_case.execute(&self.config.queries, &queries_dir).await?;

        println!(
            "Done! Pushed {} of {} configured queries to Dune.",
            report.synced_count(),
            self.config.queries.len()
        );

        Ok(())
    }

    /// 最新キャッシュ結果を表示する（引数なしなら対話メニュー）
    async fn run(
        &self,
        query_repo: Arc<DuneQueryRepository>,
        query_id: Option<u64>,
        limit: Option<usize>,
    ) -> Result<()> {
        let use_case = FetchResultUseCase::new(query_repo);

        if let Some(query_id) = query_id {
            if !self.config.contains(query_id) {
                println!("Error: Query ID {} not found in configuration", query_id);
                return Ok(());
            }

            let limit = limit.unwrap_or(DEFAULT_ROW_LIMIT);
            return self.run_once(&use_case, query_id, limit).await;
        }

        self.run_interactive(&use_case).await
    }

    /// 1クエリの最新結果を取得して描画する
    ///
    /// リモート呼び出しの失敗はここで報告して飲み込む（バッチ系と同じ分離方針）
    async fn run_once<Q: QueryRepository>(
        &self,
        use_case: &FetchResultUseCase<Q>,
        query_id: u64,
        limit: usize,
    ) -> Result<()> {
        let separator = "=".repeat(60);

        println!("\n{}", separator);
        println!("Running: {} (ID: {})", self.config.display_name(query_id), query_id);
        println!("{}\n", separator);

        match use_case.execute(query_id).await {
            Ok(result) => {
                if result.is_empty() {
                    println!("No results found.");
                    return Ok(());
                }

                let mut stdout = io::stdout();
                display::render_rows(&result, limit, &mut stdout)
                    .context("Failed to write results to stdout")?;

                println!("\nView full results: {}\n", query_url(query_id));
                Ok(())
            }
            Err(e) => {
                println!("Error running query: {}\n", e);
                Ok(())
            }
        }
    }

    /// メニューからクエリを選択して実行するループ
    async fn run_interactive<Q: QueryRepository>(
        &self,
        use_case: &FetchResultUseCase<Q>,
    ) -> Result<()> {
        if self.config.queries.is_empty() {
            println!("No queries found in configuration");
            return Ok(());
        }

        let stdin = io::stdin();

        loop {
            print!("{}", menu::render_menu(&self.config));
            println!();

            let Some(choice) = Self::prompt(&stdin, "Select a query (0 to exit): ")? else {
                break;
            };

            match menu::parse_selection(&choice, &self.config.queries) {
                Selection::Exit => break,
                Selection::Invalid => {
                    println!("\n⚠ Invalid selection. Please try again.\n");
                    continue;
                }
                Selection::Query(query_id) => {
                    let limit = match self.prompt_limit(&stdin)? {
                        Some(limit) => limit,
                        None => break,
                    };

                    self.run_once(use_case, query_id, limit).await?;

                    if Self::prompt(&stdin, "Press Enter to continue...")?.is_none() {
                        break;
                    }
                }
            }
        }

        println!("\nGoodbye!\n");
        Ok(())
    }

    /// 表示行数の入力を有効な値が得られるまで促す
    ///
    /// 入力終端に達した場合は None
    fn prompt_limit(&self, stdin: &io::Stdin) -> Result<Option<usize>> {
        loop {
            let Some(input) = Self::prompt(stdin, "\nHow many rows to display? (default: 10): ")?
            else {
                return Ok(None);
            };

            match menu::parse_limit(&input) {
                Some(limit) => return Ok(Some(limit)),
                None => println!("\n⚠ Invalid input. Please enter a number.\n"),
            }
        }
    }

    /// 全行を未加工で書き出す（失敗はそのまま伝播して異常終了）
    async fn latest(&self, query_repo: Arc<DuneQueryRepository>, query_id: u64) -> Result<()> {
        let use_case = FetchResultUseCase::new(query_repo);

        let result = use_case.execute(query_id).await?;

        let mut stdout = io::stdout();
        display::render_raw(&result, &mut stdout).context("Failed to write results to stdout")?;

        Ok(())
    }

    /// Prompt for one line of input; returns None at end of input
    fn prompt(stdin: &io::Stdin, message: &str) -> Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}
