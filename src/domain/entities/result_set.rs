//! # ResultSet Entity
//!
//! 最新キャッシュ結果のドメインエンティティ

use chrono::{DateTime, Utc};

/// 結果セットの1行（カラム名 → スカラー値のマッピング）
pub type ResultRow = serde_json::Map<String, serde_json::Value>;

/// クエリの最新キャッシュ結果
///
/// 新規実行をトリガーせず、前回計算済みの実行結果をそのまま保持する。
/// 表示のためだけに消費される
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
    execution_ended_at: Option<DateTime<Utc>>,
}

impl ResultSet {
    /// 新しい結果セットを作成
    pub fn new(rows: Vec<ResultRow>, execution_ended_at: Option<DateTime<Utc>>) -> Self {
        Self {
            rows,
            execution_ended_at,
        }
    }

    /// 行数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 結果が空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 行への参照を返す
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// 結果を計算した実行が終了した時刻（サービスが返した場合のみ）
    pub fn execution_ended_at(&self) -> Option<DateTime<Utc>> {
        self.execution_ended_at
    }
}
