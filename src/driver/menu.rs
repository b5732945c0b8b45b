//! Interactive Menu
//!
//! 対話モードのメニュー表示と入力解析

use crate::adapter::config::Config;

/// デフォルトの表示行数
pub const DEFAULT_ROW_LIMIT: usize = 10;

/// メニュー入力の解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 終了（0）
    Exit,
    /// 選択されたクエリID
    Query(u64),
    /// 無効な入力（再入力を促す）
    Invalid,
}

/// メニュー画面の文字列を組み立てる
pub fn render_menu(config: &Config) -> String {
    let mut out = String::new();

    out.push_str("\n╔════════════════════════════════════════════════════════════╗\n");
    out.push_str("║                     Dune Query Runner                      ║\n");
    out.push_str("╚════════════════════════════════════════════════════════════╝\n\n");
    out.push_str("Available Queries:\n\n");

    for (idx, &query_id) in config.queries.iter().enumerate() {
        out.push_str(&format!(
            "  {}. [{}] {}\n",
            idx + 1,
            query_id,
            config.display_name(query_id)
        ));
    }

    out.push_str("\n  0. Exit\n");

    out
}

/// メニューの選択入力を解析する
///
/// 1始まりの番号を設定順のクエリIDへ解決する。0は終了、
/// 範囲外や数値でない入力は無効
pub fn parse_selection(input: &str, queries: &[u64]) -> Selection {
    let trimmed = input.trim();

    if trimmed == "0" {
        return Selection::Exit;
    }

    match trimmed.parse::<usize>() {
        Ok(choice) if (1..=queries.len()).contains(&choice) => Selection::Query(queries[choice - 1]),
        _ => Selection::Invalid,
    }
}

/// 行数入力を解析する
///
/// 空入力はデフォルト値、数値でない入力は None（再入力を促す）
pub fn parse_limit(input: &str) -> Option<usize> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Some(DEFAULT_ROW_LIMIT);
    }

    trimmed.parse().ok()
}
