//! # Query Entity
//!
//! 保存クエリのドメインエンティティ

use serde::{Deserialize, Serialize};

/// クエリIDからDune上のクエリページURLを組み立てる
pub fn query_url(query_id: u64) -> String {
    format!("https://dune.com/queries/{}", query_id)
}

/// リモートに保存されたクエリのビジネス表現
///
/// リモートレコードのうちこのツールが扱う部分（メタデータとSQL本文）のみを
/// 保持する。SQL本文以外はこのシステムからは読み取り専用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub sql: String,
}

impl Query {
    /// 新しいクエリを作成
    ///
    /// # Errors
    ///
    /// 表示名が空の場合にエラーを返す
    pub fn new(id: u64, name: String, description: Option<String>, sql: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("query name cannot be empty");
        }

        Ok(Self {
            id,
            name,
            description,
            sql,
        })
    }

    /// Dune上のクエリページURL
    pub fn source_url(&self) -> String {
        query_url(self.id)
    }
}
