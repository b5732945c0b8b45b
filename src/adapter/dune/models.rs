use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::query::Query;
use crate::domain::entities::result_set::{ResultRow, ResultSet};

// Response from GET /query/{id}
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub query_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub query_sql: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
}

impl From<QueryResponse> for Query {
    fn from(response: QueryResponse) -> Self {
        Query {
            id: response.query_id,
            name: response.name,
            description: response.description,
            sql: response.query_sql,
        }
    }
}

// Request body for PATCH /query/{id}
#[derive(Debug, Serialize)]
pub struct UpdateQueryRequest<'a> {
    pub query_sql: &'a str,
}

// Response from PATCH /query/{id}
#[derive(Debug, Deserialize)]
pub struct UpdateQueryResponse {
    pub query_id: u64,
}

// Response from GET /query/{id}/results
// The latest cached execution: rows plus execution metadata.
#[derive(Debug, Deserialize)]
pub struct LatestResultResponse {
    #[serde(default)]
    pub execution_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub execution_ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub result: Option<ResultPayload>,
}

#[derive(Debug, Deserialize)]
pub struct ResultPayload {
    #[serde(default)]
    pub rows: Vec<ResultRow>,
    #[serde(default)]
    pub metadata: Option<ResultMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultMetadata {
    #[serde(default)]
    pub total_row_count: Option<u64>,
    #[serde(default)]
    pub column_names: Vec<String>,
}

impl From<LatestResultResponse> for ResultSet {
    fn from(response: LatestResultResponse) -> Self {
        let execution_ended_at = response.execution_ended_at;
        let rows = response.result.map(|payload| payload.rows).unwrap_or_default();

        ResultSet::new(rows, execution_ended_at)
    }
}

// Error body returned by the Dune API
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
