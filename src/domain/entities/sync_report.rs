//! # SyncReport Value Object
//!
//! 同期バッチの構造化された結果レポート

/// 個別アイテムの同期結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// 同期に成功した
    Synced,
    /// 命名規則または設定に合致せずスキップされた
    Skipped(String),
    /// リモート呼び出しまたはI/Oに失敗した
    Failed(String),
}

/// 同期対象1アイテムの記録
#[derive(Debug, Clone)]
pub struct SyncItem {
    /// 対象のクエリID（ファイル名から抽出できなかった場合は None）
    pub query_id: Option<u64>,
    /// 対象のローカルファイル名
    pub file_name: String,
    /// アイテムの結果
    pub status: SyncStatus,
}

/// 同期バッチ全体の結果レポート
///
/// エラーを印字するだけでなく、アイテムごとの結果を構造化して
/// 呼び出し側へ返すためのバリューオブジェクト
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    items: Vec<SyncItem>,
}

impl SyncReport {
    /// 新しい空のレポートを作成
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 成功したアイテムを記録
    pub fn synced(&mut self, query_id: u64, file_name: String) {
        self.items.push(SyncItem {
            query_id: Some(query_id),
            file_name,
            status: SyncStatus::Synced,
        });
    }

    /// スキップされたアイテムを記録
    pub fn skipped(&mut self, query_id: Option<u64>, file_name: String, reason: impl Into<String>) {
        self.items.push(SyncItem {
            query_id,
            file_name,
            status: SyncStatus::Skipped(reason.into()),
        });
    }

    /// 失敗したアイテムを記録
    pub fn failed(&mut self, query_id: Option<u64>, file_name: String, message: impl Into<String>) {
        self.items.push(SyncItem {
            query_id,
            file_name,
            status: SyncStatus::Failed(message.into()),
        });
    }

    /// 成功したアイテム数
    pub fn synced_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == SyncStatus::Synced)
            .count()
    }

    /// スキップされたアイテム数
    pub fn skipped_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.status, SyncStatus::Skipped(_)))
            .count()
    }

    /// 失敗したアイテム数
    pub fn failed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.status, SyncStatus::Failed(_)))
            .count()
    }

    /// バッチが完全に成功したかチェックします。
    ///
    /// # 戻り値
    ///
    /// 失敗数が0の場合に `true`（スキップは失敗に数えない）
    ///
    /// # 例
    ///
    /// ```
    /// use dunesync::domain::entities::sync_report::SyncReport;
    ///
    /// // 成功ケース
    /// let mut report = SyncReport::new();
    /// report.synced(5268612, "5268612_my_query.sql".to_string());
    /// assert!(report.is_success());
    ///
    /// // 部分的な失敗
    /// report.failed(Some(5782251), "5782251_other.sql".to_string(), "network error");
    /// assert!(!report.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// 記録された全アイテムへの参照を返す
    pub fn items(&self) -> &[SyncItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty_success() {
        let report = SyncReport::new();

        assert_eq!(report.synced_count(), 0);
        assert_eq!(report.skipped_count(), 0);
        assert_eq!(report.failed_count(), 0);
        assert!(report.is_success());
        assert!(report.items().is_empty());
    }

    #[test]
    fn test_report_counts() {
        let mut report = SyncReport::new();
        report.synced(5268612, "5268612_my_query.sql".to_string());
        report.skipped(None, "notes.sql".to_string(), "invalid filename format");
        report.skipped(Some(999), "999_other.sql".to_string(), "not in configuration");
        report.failed(Some(5782251), "5782251_info.sql".to_string(), "network error");

        assert_eq!(report.synced_count(), 1);
        assert_eq!(report.skipped_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.is_success());
        assert_eq!(report.items().len(), 4);
    }

    #[test]
    fn test_skips_do_not_fail_the_batch() {
        let mut report = SyncReport::new();
        report.skipped(None, "notes.sql".to_string(), "invalid filename format");

        assert!(report.is_success());
    }
}
