//! Filesystem Query File Repository
//!
//! QueryFileRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::query_file_repository::QueryFileRepository;

/// ファイルシステムベースのクエリファイルリポジトリ
pub struct FsQueryFileRepository;

impl FsQueryFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// `.sql` ファイルを列挙する（内部実装）
    fn list_sql_files_internal(dir: &str) -> Result<Vec<PathBuf>> {
        let expanded = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded.as_ref());

        if !dir.exists() {
            warn!("Queries directory does not exist: {}", dir.display());
            return Ok(Vec::new());
        }

        let mut sql_files = Vec::new();

        for entry in WalkDir::new(&dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("sql") {
                sql_files.push(path.to_path_buf());
            }
        }

        // 実行ごとに安定した順序で処理する
        sql_files.sort();

        info!("Found {} SQL files in {}", sql_files.len(), dir.display());

        Ok(sql_files)
    }

    /// ファイルを読み込む（内部実装）
    fn read_file_internal(path: &PathBuf) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read SQL file: {}", path.display()))
    }

    /// ファイルを書き込む（内部実装）
    fn write_file_internal(dir: &str, file_name: &str, contents: &str) -> Result<PathBuf> {
        let expanded = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded.as_ref());

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create queries directory: {}", dir.display()))?;

        let path = dir.join(file_name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write SQL file: {}", path.display()))?;

        Ok(path)
    }
}

#[async_trait]
impl QueryFileRepository for FsQueryFileRepository {
    async fn list_sql_files(&self, dir: &str) -> Result<Vec<PathBuf>> {
        // 同期I/Oなので tokio::task::spawn_blocking でラップ
        let dir = dir.to_string();
        tokio::task::spawn_blocking(move || Self::list_sql_files_internal(&dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_file_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn write_file(&self, dir: &str, file_name: &str, contents: &str) -> Result<PathBuf> {
        let dir = dir.to_string();
        let file_name = file_name.to_string();
        let contents = contents.to_string();
        tokio::task::spawn_blocking(move || Self::write_file_internal(&dir, &file_name, &contents))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FsQueryFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
