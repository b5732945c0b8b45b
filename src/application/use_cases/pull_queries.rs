//! # Pull Queries Use Case
//!
//! リモートのクエリをローカルリポジトリへ取得するユースケース

use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::sync_report::SyncReport;
use crate::domain::repositories::query_file_repository::QueryFileRepository;
use crate::domain::repositories::query_repository::QueryRepository;
use crate::domain::services::{header, naming};

/// クエリ取得ユースケース
///
/// 設定された各クエリIDについてリモートからメタデータとSQLを取得し、
/// 由来ヘッダ付きでローカルファイルへ書き出す（既存ファイルは上書き）
pub struct PullQueriesUseCase<Q: QueryRepository, F: QueryFileRepository> {
    query_repository: Arc<Q>,
    file_repository: Arc<F>,
}

impl<Q: QueryRepository, F: QueryFileRepository> PullQueriesUseCase<Q, F> {
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

    /// 設定された全クエリを取得する
    ///
    /// 個々のクエリの失敗はレポートに記録し、残りのクエリの処理は継続する
    ///
    /// # Arguments
    ///
    /// * `query_ids` - 取得対象のクエリID（設定の順序どおり）
    /// * `queries_dir` - 書き出し先ディレクトリ
    ///
    /// # Returns
    ///
    /// アイテムごとの結果を集めた同期レポート
    pub async fn execute(&self, query_ids: &[u64], queries_dir: &str) -> Result<SyncReport> {
        let mut report = SyncReport::new();

        for &query_id in query_ids {
            println!("Pulling query {}...", query_id);

            match self.pull_one(query_id, queries_dir).await {
                Ok((file_name, path)) => {
                    println!("✓ Saved to {}", path.display());
                    report.synced(query_id, file_name);
                }
                Err(e) => {
                    println!("✗ Error pulling query {}: {}", query_id, e);
                    warn!("pull failed for query {}: {:#}", query_id, e);
                    report.failed(Some(query_id), String::new(), e.to_string());
                }
            }
            println!();
        }

        Ok(report)
    }

    /// 1クエリを取得してファイルへ書き出す
    async fn pull_one(&self, query_id: u64, queries_dir: &str) -> Result<(String, PathBuf)> {
        let query = self.query_repository.fetch_query(query_id).await?;

        let file_name = naming::file_name(query.id, &query.name);
        let contents = header::render_file(&query);

        let path = self
            .file_repository
            .write_file(queries_dir, &file_name, &contents)
            .await?;

        Ok((file_name, path))
    }
}
