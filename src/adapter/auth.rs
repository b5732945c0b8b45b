//! Dune API Authentication
//!
//! Dune APIキーの解決（環境変数 / 設定ファイル）

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;

/// Expands tilde in path and returns the full path
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Resolves the Dune API key
///
/// 環境変数が設定されていればそれを優先し、なければ `env_file` を
/// KEY=VALUE 形式として解析して探す
pub fn resolve_api_key(var_name: &str, env_file: &str) -> Result<String> {
    if let Ok(value) = std::env::var(var_name) {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }

    let expanded = expand_path(env_file);
    let content = fs::read_to_string(&expanded).with_context(|| {
        format!(
            "{} is not set and the env file could not be read: {}",
            var_name, expanded
        )
    })?;

    parse_env_file(&content)
        .remove(var_name)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{} not found in {}", var_name, expanded))
}

/// Parses KEY=VALUE lines (comments and blank lines ignored)
fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            vars.insert(key.trim().to_string(), value.to_string());
        }
    }

    vars
}
