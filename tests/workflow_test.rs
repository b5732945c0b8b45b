//! Workflow Integration Tests
//!
//! プル/プッシュのユースケースを実ファイルシステムで検証する統合テスト

use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use dunesync::adapter::config::Config;
use dunesync::adapter::repositories::fs_query_file_repository::FsQueryFileRepository;
use dunesync::application::use_cases::pull_queries::PullQueriesUseCase;
use dunesync::application::use_cases::push_queries::PushQueriesUseCase;
use dunesync::domain::entities::query::Query;
use dunesync::domain::entities::result_set::ResultSet;
use dunesync::domain::repositories::query_repository::{ApiError, QueryRepository};

/// リモートサービスの代わりに固定データを返すスタブ
struct StubQueryRepository {
    queries: Vec<Query>,
    pushed: Mutex<Vec<(u64, String)>>,
}

impl StubQueryRepository {
    fn new(queries: Vec<Query>) -> Self {
        Self {
            queries,
            pushed: Mutex::new(Vec::new()),
        }
    }

    fn pushed(&self) -> Vec<(u64, String)> {
        self.pushed.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryRepository for StubQueryRepository {
    async fn fetch_query(&self, query_id: u64) -> Result<Query, ApiError> {
        self.queries
            .iter()
            .find(|query| query.id == query_id)
            .cloned()
            .ok_or(ApiError::NotFound(query_id))
    }

    async fn update_query_sql(&self, query_id: u64, sql: &str) -> Result<(), ApiError> {
        if !self.queries.iter().any(|query| query.id == query_id) {
            return Err(ApiError::NotFound(query_id));
        }

        self.pushed.lock().unwrap().push((query_id, sql.to_string()));
        Ok(())
    }

    async fn fetch_latest_result(&self, _query_id: u64) -> Result<ResultSet, ApiError> {
        Ok(ResultSet::default())
    }
}

fn create_test_query() -> Query {
    Query {
        id: 5268612,
        name: "My Query".to_string(),
        description: None,
        sql: "SELECT 1;".to_string(),
    }
}

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path) -> String {
    let config_path = dir.join("queries.yml");
    let config_content = "queries:\n  - 5268612\n  - 5782251\nnames:\n  5268612: DeFindex Vaults\nqueries_dir: ./queries\n";
    fs::write(&config_path, config_content).unwrap();
    config_path.to_string_lossy().to_string()
}

#[test]
fn test_config_load_from_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let config = Config::load(&config_path).unwrap();

    assert_eq!(config.queries, vec![5268612, 5782251]);
    assert_eq!(config.display_name(5268612), "DeFindex Vaults");
    assert_eq!(config.display_name(5782251), "Query 5782251");
    assert_eq!(config.queries_dir, "./queries");
    assert_eq!(config.api_key_env, "DUNE_API_KEY");
}

#[tokio::test]
async fn test_pull_then_push_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let queries_dir = temp_dir.path().join("queries").to_string_lossy().to_string();

    let query_repo = Arc::new(StubQueryRepository::new(vec![create_test_query()]));
    let file_repo = Arc::new(FsQueryFileRepository::new());

    // Pull: ヘッダ付きファイルが生成される
    let pull = PullQueriesUseCase::new(query_repo.clone(), file_repo.clone());
    let report = pull.execute(&[5268612], &queries_dir).await.unwrap();

    assert_eq!(report.synced_count(), 1);

    let file_path = temp_dir.path().join("queries").join("5268612_my_query.sql");
    let contents = fs::read_to_string(&file_path).unwrap();
    assert!(contents.starts_with("-- Query: My Query\n"));
    assert!(contents.contains("-- Description: N/A\n"));
    assert!(contents.contains("-- Source: https://dune.com/queries/5268612\n"));
    assert!(contents.ends_with("\n\nSELECT 1;"));

    // Push: 手を加えていないファイルからは元のSQLだけが送信される
    let push = PushQueriesUseCase::new(query_repo.clone(), file_repo);
    let report = push.execute(&[5268612], &queries_dir).await.unwrap();

    assert_eq!(report.synced_count(), 1);
    assert_eq!(query_repo.pushed(), vec![(5268612, "SELECT 1;".to_string())]);
}

#[tokio::test]
async fn test_pull_continues_after_missing_query() {
    let temp_dir = TempDir::new().unwrap();
    let queries_dir = temp_dir.path().join("queries").to_string_lossy().to_string();

    let query_repo = Arc::new(StubQueryRepository::new(vec![create_test_query()]));
    let file_repo = Arc::new(FsQueryFileRepository::new());

    let pull = PullQueriesUseCase::new(query_repo, file_repo);
    let report = pull.execute(&[999, 5268612], &queries_dir).await.unwrap();

    assert_eq!(report.synced_count(), 1);
    assert_eq!(report.failed_count(), 1);
    assert!(temp_dir
        .path()
        .join("queries")
        .join("5268612_my_query.sql")
        .exists());
}

#[tokio::test]
async fn test_push_skips_unconfigured_and_malformed_files() {
    let temp_dir = TempDir::new().unwrap();
    let queries_dir_path = temp_dir.path().join("queries");
    fs::create_dir_all(&queries_dir_path).unwrap();
    let queries_dir = queries_dir_path.to_string_lossy().to_string();

    fs::write(queries_dir_path.join("5268612_my_query.sql"), "SELECT 1;").unwrap();
    fs::write(queries_dir_path.join("999_other.sql"), "SELECT 2;").unwrap();
    fs::write(queries_dir_path.join("notes.sql"), "SELECT 3;").unwrap();

    let query_repo = Arc::new(StubQueryRepository::new(vec![create_test_query()]));
    let file_repo = Arc::new(FsQueryFileRepository::new());

    let push = PushQueriesUseCase::new(query_repo.clone(), file_repo);
    let report = push.execute(&[5268612], &queries_dir).await.unwrap();

    assert_eq!(report.synced_count(), 1);
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(query_repo.pushed(), vec![(5268612, "SELECT 1;".to_string())]);
}
