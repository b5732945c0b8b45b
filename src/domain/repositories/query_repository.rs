//! # Query Repository Trait
//!
//! リモートのクエリ実行サービスへのアクセスを抽象化

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::query::Query;
use crate::domain::entities::result_set::ResultSet;

/// リモートAPI呼び出しの型付きエラー
///
/// 未検出・認証・ネットワーク・サービス側の失敗を区別して
/// 呼び出し側へ返す
#[derive(Debug, Error)]
pub enum ApiError {
    /// クエリIDがリモートに存在しない
    #[error("query {0} not found")]
    NotFound(u64),

    /// APIキーが無効、または権限が不足している
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// 接続やタイムアウトなどトランスポート層の失敗
    #[error("network error: {0}")]
    Network(String),

    /// サービスがエラーステータスを返した
    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    /// レスポンスボディのデコードに失敗
    #[error("invalid response: {0}")]
    Decode(String),
}

/// クエリリポジトリ
///
/// 保存クエリの取得・SQL更新・最新キャッシュ結果の取得を担当するリポジトリ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// クエリのメタデータとSQLを取得する
    ///
    /// # Arguments
    ///
    /// * `query_id` - 対象のクエリID
    ///
    /// # Errors
    ///
    /// リモート呼び出しに失敗した場合に型付きエラーを返す
    async fn fetch_query(&self, query_id: u64) -> Result<Query, ApiError>;

    /// クエリのSQL本文を更新する
    ///
    /// # Arguments
    ///
    /// * `query_id` - 対象のクエリID
    /// * `sql` - 新しいSQL本文
    async fn update_query_sql(&self, query_id: u64, sql: &str) -> Result<(), ApiError>;

    /// 最新のキャッシュ済み実行結果を取得する
    ///
    /// 新規実行はトリガーしない
    async fn fetch_latest_result(&self, query_id: u64) -> Result<ResultSet, ApiError>;
}
