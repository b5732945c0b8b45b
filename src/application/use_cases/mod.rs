//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **PullQueriesUseCase**: リモートのクエリをローカルファイルへ取得
//! - **PushQueriesUseCase**: ローカルファイルのSQLをリモートへ反映
//! - **FetchResultUseCase**: 最新キャッシュ結果の取得

pub mod fetch_result;
pub mod pull_queries;
pub mod push_queries;
