//! Dune Query Repository Implementation
//!
//! QueryRepositoryのDune API実装

use async_trait::async_trait;

use crate::adapter::dune::client::DuneClient;
use crate::domain::entities::query::Query;
use crate::domain::entities::result_set::ResultSet;
use crate::domain::repositories::query_repository::{ApiError, QueryRepository};

/// Dune APIベースのクエリリポジトリ
pub struct DuneQueryRepository {
    client: DuneClient,
}

impl DuneQueryRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: DuneClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueryRepository for DuneQueryRepository {
    async fn fetch_query(&self, query_id: u64) -> Result<Query, ApiError> {
        let response = self.client.get_query(query_id).await?;

        Ok(response.into())
    }

    async fn update_query_sql(&self, query_id: u64, sql: &str) -> Result<(), ApiError> {
        self.client.update_query_sql(query_id, sql).await?;

        Ok(())
    }

    async fn fetch_latest_result(&self, query_id: u64) -> Result<ResultSet, ApiError> {
        let response = self.client.get_latest_result(query_id).await?;

        Ok(response.into())
    }
}
