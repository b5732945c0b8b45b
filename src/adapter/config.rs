//! Configuration
//!
//! YAML設定ファイル（queries.yml）の読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

fn default_queries_dir() -> String {
    "./queries".to_string()
}

fn default_api_base_url() -> String {
    crate::adapter::dune::client::DEFAULT_BASE_URL.to_string()
}

fn default_env_file() -> String {
    "./configs/.env".to_string()
}

fn default_api_key_env() -> String {
    "DUNE_API_KEY".to_string()
}

/// 実行単位で一度だけ読み込まれる設定（実行中は不変）
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// 同期対象のクエリID（順序を保持）
    pub queries: Vec<u64>,

    /// コンソール表示用のクエリ名（任意の補強情報）
    ///
    /// 未登録のIDは "Query {id}" にフォールバックする
    #[serde(default)]
    pub names: HashMap<u64, String>,

    /// ローカルSQLファイルのディレクトリ
    #[serde(default = "default_queries_dir")]
    pub queries_dir: String,

    /// Dune APIのベースURL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// APIキーを探す設定ファイル（環境変数が未設定の場合のみ参照）
    #[serde(default = "default_env_file")]
    pub env_file: String,

    /// APIキーを保持する環境変数名
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルが読めない、またはYAMLとして不正な場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// 表示用のクエリ名を返す（未登録のIDは "Query {id}"）
    pub fn display_name(&self, query_id: u64) -> String {
        self.names
            .get(&query_id)
            .cloned()
            .unwrap_or_else(|| format!("Query {}", query_id))
    }

    /// IDが設定に含まれるかどうか
    pub fn contains(&self, query_id: u64) -> bool {
        self.queries.contains(&query_id)
    }
}
