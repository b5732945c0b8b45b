//! # Provenance Header Service
//!
//! プルしたSQLファイルへ付与する由来ヘッダの生成と除去

use crate::domain::entities::query::Query;

/// SQLコメント行のプレフィックス
const COMMENT_PREFIX: &str = "--";

/// 説明が未設定の場合に使う表記
const EMPTY_DESCRIPTION: &str = "N/A";

/// 由来ヘッダを描画する（コメント4行 + 空行）
///
/// 表示名・説明（なければ "N/A"）・取得元URL・リポジトリ管理の目印の
/// 4行からなるコメントブロック
pub fn render_header(query: &Query) -> String {
    let description = query
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(EMPTY_DESCRIPTION);

    format!(
        "-- Query: {}\n-- Description: {}\n-- Source: {}\n-- already part of a query repo\n\n",
        query.name,
        description,
        query.source_url()
    )
}

/// ローカルファイル本文（由来ヘッダ + 生のSQL）を描画する
pub fn render_file(query: &Query) -> String {
    format!("{}{}", render_header(query), query.sql)
}

/// 先頭の由来ヘッダを取り除く
///
/// 先頭から、空行または `--` で始まる行を最初のそれ以外の行まで読み飛ばし、
/// 残りを前後の空白を落として返す。冪等
pub fn strip_header(text: &str) -> String {
    let body: Vec<&str> = text
        .lines()
        .skip_while(|line| line.trim().is_empty() || line.starts_with(COMMENT_PREFIX))
        .collect();

    body.join("\n").trim().to_string()
}
