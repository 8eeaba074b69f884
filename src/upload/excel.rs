use super::find_column;
use crate::error::{ReportError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 先頭シートの1行目をヘッダーとして指定列を読み込む
pub fn read_excel_names(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ReportError::ExcelRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReportError::ExcelRead("el archivo no tiene hojas".into()))?
        .map_err(|e| ReportError::ExcelRead(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let idx = find_column(&headers, column)?;

    let names = rows
        .filter_map(|row| row.get(idx))
        .map(cell_text)
        .filter(|value| !value.trim().is_empty())
        .collect();

    Ok(names)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
