//! # Push Queries Use Case
//!
//! ローカルファイルのSQLをリモートへ反映するユースケース

use anyhow::Result;
use log::warn;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::query::query_url;
use crate::domain::entities::sync_report::SyncReport;
use crate::domain::repositories::query_file_repository::QueryFileRepository;
use crate::domain::repositories::query_repository::QueryRepository;
use crate::domain::services::{header, naming};

/// クエリ反映ユースケース
///
/// 命名規則に合致するローカルファイルを列挙し、由来ヘッダを取り除いた
/// SQL本文を埋め込まれたIDのリモートクエリへ送信する
pub struct PushQueriesUseCase<Q: QueryRepository, F: QueryFileRepository> {
    query_repository: Arc<Q>,
    file_repository: Arc<F>,
}

impl<Q: QueryRepository, F: QueryFileRepository> PushQueriesUseCase<Q, F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `query_repository` - リモートのクエリリポジトリ
    /// * `file_repository` - ローカルのファイルリポジトリ
    pub fn new(query_repository: Arc<Q>, file_repository: Arc<F>) -> Self {
        Self {
            query_repository,
            file_repository,
        }
    }

    /// クエリディレクトリの全ファイルを反映する
    ///
    /// 命名規則に合致しないファイルと設定にないIDのファイルは警告付きで
    /// スキップする。個々の失敗はレポートに記録し、処理は継続する
    ///
    /// # Arguments
    ///
    /// * `query_ids` - 設定されたクエリID
    /// * `queries_dir` - ローカルのクエリディレクトリ
    ///
    /// # Returns
    ///
    /// アイテムごとの結果を集めた同期レポート
    pub async fn execute(&self, query_ids: &[u64], queries_dir: &str) -> Result<SyncReport> {
        let mut report = SyncReport::new();

        let files = self.file_repository.list_sql_files(queries_dir).await?;

        if files.is_empty() {
            println!("No SQL files found in {}", queries_dir);
            return Ok(report);
        }

        println!("Found {} SQL files\n", files.len());

        for path in files {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            let Some(query_id) = naming::parse_query_id(&file_name) else {
                println!("⚠ Skipping {} - invalid filename format", file_name);
                report.skipped(None, file_name, "invalid filename format");
                continue;
            };

            if !query_ids.contains(&query_id) {
                println!("⚠ Skipping query {} - not in configuration", query_id);
                report.skipped(Some(query_id), file_name, "not in configuration");
                continue;
            }

            println!("Pushing query {} from {}...", query_id, file_name);

            match self.push_one(query_id, &path).await {
                Ok(()) => {
                    println!("✓ Successfully updated query {}", query_id);
                    println!("  View at: {}", query_url(query_id));
                    report.synced(query_id, file_name);
                }
                Err(e) => {
                    println!("✗ Error pushing query {}: {}", query_id, e);
                    warn!("push failed for query {}: {:#}", query_id, e);
                    report.failed(Some(query_id), file_name, e.to_string());
                }
            }
            println!();
        }

        Ok(report)
    }

    /// 1ファイルを読み込み、ヘッダを除去してリモートへ送信する
    async fn push_one(&self, query_id: u64, path: &Path) -> Result<()> {
        let contents = self.file_repository.read_file(path).await?;
        let sql = header::strip_header(&contents);

        self.query_repository.update_query_sql(query_id, &sql).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sync_report::SyncStatus;
    use crate::domain::repositories::query_file_repository::MockQueryFileRepository;
    use crate::domain::repositories::query_repository::{ApiError, MockQueryRepository};
    use std::path::PathBuf;

    const PULLED_FILE: &str = "-- Query: My Query\n\
                               -- Description: N/A\n\
                               -- Source: https://dune.com/queries/5268612\n\
                               -- already part of a query repo\n\
                               \n\
                               SELECT 1;";

    #[tokio::test]
    async fn test_push_strips_header_and_updates() {
        let mut file_repo = MockQueryFileRepository::new();
        file_repo
            .expect_list_sql_files()
            .returning(|_| Ok(vec![PathBuf::from("./queries/5268612_my_query.sql")]));
        file_repo
            .expect_read_file()
            .returning(|_| Ok(PULLED_FILE.to_string()));

        let mut query_repo = MockQueryRepository::new();
        query_repo
            .expect_update_query_sql()
            .withf(|query_id, sql| *query_id == 5268612 && sql == "SELECT 1;")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = PushQueriesUseCase::new(Arc::new(query_repo), Arc::new(file_repo));
        let report = use_case.execute(&[5268612], "./queries").await.unwrap();

        assert_eq!(report.synced_count(), 1);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_push_skips_malformed_and_unconfigured_files() {
        let mut file_repo = MockQueryFileRepository::new();
        file_repo.expect_list_sql_files().returning(|_| {
            Ok(vec![
                PathBuf::from("./queries/5268612_my_query.sql"),
                PathBuf::from("./queries/999_other.sql"),
                PathBuf::from("./queries/notes.sql"),
            ])
        });
        file_repo
            .expect_read_file()
            .times(1)
            .returning(|_| Ok(PULLED_FILE.to_string()));

        let mut query_repo = MockQueryRepository::new();
        query_repo
            .expect_update_query_sql()
            .withf(|query_id, _| *query_id == 5268612)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = PushQueriesUseCase::new(Arc::new(query_repo), Arc::new(file_repo));
        let report = use_case.execute(&[5268612], "./queries").await.unwrap();

        assert_eq!(report.synced_count(), 1);
        assert_eq!(report.skipped_count(), 2);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_push_isolates_remote_failures() {
        let mut file_repo = MockQueryFileRepository::new();
        file_repo.expect_list_sql_files().returning(|_| {
            Ok(vec![
                PathBuf::from("./queries/1_first.sql"),
                PathBuf::from("./queries/2_second.sql"),
            ])
        });
        file_repo
            .expect_read_file()
            .returning(|_| Ok("SELECT 1;".to_string()));

        let mut query_repo = MockQueryRepository::new();
        query_repo.expect_update_query_sql().returning(|query_id, _| {
            if query_id == 1 {
                Err(ApiError::Auth("invalid API key".to_string()))
            } else {
                Ok(())
            }
        });

        let use_case = PushQueriesUseCase::new(Arc::new(query_repo), Arc::new(file_repo));
        let report = use_case.execute(&[1, 2], "./queries").await.unwrap();

        assert_eq!(report.synced_count(), 1);
        assert_eq!(report.failed_count(), 1);

        let failed = report
            .items()
            .iter()
            .find(|item| matches!(item.status, SyncStatus::Failed(_)))
            .unwrap();
        assert_eq!(failed.query_id, Some(1));
    }

    #[tokio::test]
    async fn test_push_empty_directory() {
        let mut file_repo = MockQueryFileRepository::new();
        file_repo.expect_list_sql_files().returning(|_| Ok(vec![]));

        let query_repo = MockQueryRepository::new();

        let use_case = PushQueriesUseCase::new(Arc::new(query_repo), Arc::new(file_repo));
        let report = use_case.execute(&[5268612], "./queries").await.unwrap();

        assert_eq!(report.items().len(), 0);
    }
}
