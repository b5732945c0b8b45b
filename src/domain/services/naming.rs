//! # Query File Naming Service
//!
//! ローカルSQLファイルの命名規則（`{id}_{name}.sql`）

/// クエリ名をファイル名向けにサニタイズする
///
/// 小文字化し、スペースとハイフンをアンダースコアに置き換える
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

/// クエリIDと表示名からローカルファイル名を組み立てる
pub fn file_name(query_id: u64, name: &str) -> String {
    format!("{}_{}.sql", query_id, sanitize_name(name))
}

/// ファイル名から先頭のクエリIDを抽出する
///
/// `{id}_{name}.sql` 形式（IDは非負整数リテラル）に一致した場合のみ
/// `Some(id)` を返す。アンダースコアを欠く名前や数値でない接頭辞は None
pub fn parse_query_id(file_name: &str) -> Option<u64> {
    let stem = file_name.strip_suffix(".sql")?;
    let (id_part, _rest) = stem.split_once('_')?;

    if id_part.is_empty() || !id_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    id_part.parse().ok()
}
