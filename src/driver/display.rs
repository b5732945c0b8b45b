//! Result Display
//!
//! 結果セットのコンソール描画

use std::io::{self, Write};

use serde_json::Value;

use crate::domain::entities::result_set::ResultSet;

/// 1つの値を表示用の文字列へ変換する
///
/// 文字列は引用符なし、その他のJSON値はそのままの表記で描画する
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 結果セットを行数制限付きで描画する
///
/// 合計行数、min(N, limit) 行の本体（各フィールドを1行ずつ）、
/// 省略された行数の告知の順に書き出す
pub fn render_rows(result: &ResultSet, limit: usize, out: &mut impl Write) -> io::Result<()> {
    if result.is_empty() {
        writeln!(out, "No results found.")?;
        return Ok(());
    }

    let total_rows = result.len();
    writeln!(out, "Total rows: {}", total_rows)?;
    writeln!(out, "Showing first {} rows:", total_rows.min(limit))?;
    writeln!(out)?;

    for (idx, row) in result.rows().iter().take(limit).enumerate() {
        writeln!(out, "Row {}:", idx + 1)?;
        for (key, value) in row {
            writeln!(out, "  {}: {}", key, format_value(value))?;
        }
        writeln!(out)?;
    }

    if total_rows > limit {
        writeln!(out, "... and {} more rows.", total_rows - limit)?;
    }

    Ok(())
}

/// 全行を加工せず1行ずつ書き出す
pub fn render_raw(result: &ResultSet, out: &mut impl Write) -> io::Result<()> {
    for row in result.rows() {
        let line = serde_json::to_string(row).map_err(io::Error::other)?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
