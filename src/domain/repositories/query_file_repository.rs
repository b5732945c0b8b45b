//! # Query File Repository Trait
//!
//! ローカルSQLファイルの列挙と読み書きを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// クエリファイルリポジトリ
///
/// ローカルのクエリディレクトリを担当するリポジトリ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryFileRepository: Send + Sync {
    /// ディレクトリ直下の `.sql` ファイルを列挙する（ファイル名順）
    ///
    /// # Arguments
    ///
    /// * `dir` - クエリディレクトリのパス
    async fn list_sql_files(&self, dir: &str) -> Result<Vec<PathBuf>>;

    /// ファイルの内容を読み込む
    async fn read_file(&self, path: &Path) -> Result<String>;

    /// ファイルを書き込む（存在すれば上書き、ディレクトリは必要なら作成）
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのフルパス
    async fn write_file(&self, dir: &str, file_name: &str, contents: &str) -> Result<PathBuf>;
}
