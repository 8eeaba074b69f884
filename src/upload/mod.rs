//! 出席ファイル読み込み
//!
//! Zoomの参加者レポート（CSV）またはExcelから名前列を取り出し、
//! 完全一致で重複を除去する（最初の出現を残す）。

mod excel;

use crate::error::{ReportError, Result};
use attendance_common::dedup_names;
use std::io::Read;
use std::path::Path;

/// Zoomレポートの名前列
pub const DEFAULT_NAME_COLUMN: &str = "Nombre de usuario";

const CSV_EXTENSIONS: &[&str] = &["csv", "txt"];
const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 出席ファイルから名前一覧を読み込む（重複除去済み）
pub fn read_attendance_names(path: &Path, column: &str) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let names = if CSV_EXTENSIONS.contains(&ext.as_str()) {
        let file = std::fs::File::open(path)?;
        read_csv_names(file, column)?
    } else if EXCEL_EXTENSIONS.contains(&ext.as_str()) {
        excel::read_excel_names(path, column)?
    } else {
        return Err(ReportError::UnsupportedFileType(path.display().to_string()));
    };

    tracing::debug!(path = %path.display(), names = names.len(), "attendance file read");
    Ok(dedup_names(names))
}

/// CSVから指定列の値を読み込む（空セルは除外、重複は残す）
pub fn read_csv_names<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let idx = find_column(&headers, column)?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(idx) {
            if !value.trim().is_empty() {
                names.push(value.to_string());
            }
        }
    }

    Ok(names)
}

/// ヘッダーから列位置を探す（BOM・前後空白は無視）
fn find_column(headers: &[String], column: &str) -> Result<usize> {
    let wanted = column.trim();
    headers
        .iter()
        .position(|h| clean_header(h) == wanted)
        .ok_or_else(|| ReportError::MissingColumn {
            column: wanted.to_string(),
            available: headers
                .iter()
                .map(|h| clean_header(h))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn clean_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}
