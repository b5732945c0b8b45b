//! # Fetch Result Use Case
//!
//! 最新キャッシュ結果の取得ユースケース

use std::sync::Arc;

use crate::domain::entities::result_set::ResultSet;
use crate::domain::repositories::query_repository::{ApiError, QueryRepository};

/// 最新結果取得ユースケース
///
/// クエリの最新キャッシュ結果を取得する（新規実行はトリガーしない）
pub struct FetchResultUseCase<Q: QueryRepository> {
    query_repository: Arc<Q>,
}

impl<Q: QueryRepository> FetchResultUseCase<Q> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `query_repository` - リモートのクエリリポジトリ
    pub fn new(query_repository: Arc<Q>) -> Self {
        Self { query_repository }
    }

    /// 最新のキャッシュ済み結果を取得する
    ///
    /// # Errors
    ///
    /// リモート呼び出しに失敗した場合に型付きエラーを返す。リトライはしない
    pub async fn execute(&self, query_id: u64) -> Result<ResultSet, ApiError> {
        self.query_repository.fetch_latest_result(query_id).await
    }
}
