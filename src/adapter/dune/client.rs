//! Dune API Client
//!
//! Dune Analytics REST APIの薄いHTTPクライアント

use anyhow::{Context, Result};
use log::debug;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::repositories::query_repository::ApiError;

use super::models::{
    ErrorResponse, LatestResultResponse, QueryResponse, UpdateQueryRequest, UpdateQueryResponse,
};

/// デフォルトのAPIベースURL
pub const DEFAULT_BASE_URL: &str = "https://api.dune.com/api/v1";

const API_KEY_HEADER: &str = "X-Dune-API-Key";
const TIMEOUT_SECONDS: u64 = 60;

/// Async Dune API client
///
/// 各呼び出しは一度だけ試行する（リトライ・バックオフなし）
pub struct DuneClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DuneClient {
    /// Create a new client that is ready to talk to the API
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetch query metadata and SQL by id
    pub async fn get_query(&self, query_id: u64) -> Result<QueryResponse, ApiError> {
        let url = format!("{}/query/{}", self.base_url, query_id);
        let request = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);

        self.execute_json(request, query_id).await
    }

    /// Update the SQL body of a query
    pub async fn update_query_sql(
        &self,
        query_id: u64,
        sql: &str,
    ) -> Result<UpdateQueryResponse, ApiError> {
        let url = format!("{}/query/{}", self.base_url, query_id);
        let request = self
            .http
            .patch(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&UpdateQueryRequest { query_sql: sql });

        self.execute_json(request, query_id).await
    }

    /// Fetch the latest cached execution result of a query
    pub async fn get_latest_result(
        &self,
        query_id: u64,
    ) -> Result<LatestResultResponse, ApiError> {
        let url = format!("{}/query/{}/results", self.base_url, query_id);
        let request = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);

        self.execute_json(request, query_id).await
    }

    /// Send a request and decode the JSON response, mapping error statuses
    /// to the typed domain error
    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        query_id: u64,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Dune API response {} for query {}", status, query_id);

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(query_id));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Auth(Self::error_message(response).await));
        }

        if !status.is_success() {
            return Err(ApiError::Service {
                status: status.as_u16(),
                message: Self::error_message(response).await,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Extract a human-readable message from an error response body
    async fn error_message(response: Response) -> String {
        match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
                .map(|parsed| parsed.error)
                .unwrap_or_else(|_| {
                    if body.is_empty() {
                        "unknown error".to_string()
                    } else {
                        body
                    }
                }),
            Err(_) => "unknown error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_trims_trailing_slash() {
        let client =
            DuneClient::new("test-key".to_string(), "https://api.dune.com/api/v1/".to_string())
                .unwrap();

        assert_eq!(client.base_url, "https://api.dune.com/api/v1");
    }

    #[test]
    fn test_client_new_with_default_base_url() {
        let client = DuneClient::new("test-key".to_string(), DEFAULT_BASE_URL.to_string());

        assert!(client.is_ok());
    }
}
