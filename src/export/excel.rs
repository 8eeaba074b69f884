//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成し、ファイルに書き出す

use super::output_path_for;
use crate::error::{ReportError, Result};
use attendance_common::export::excel_core::generate_report_buffer;
use attendance_common::AttendanceReport;
use regex::Regex;
use std::path::{Path, PathBuf};

/// ダウンロード用MIMEタイプ
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

lazy_static::lazy_static! {
    /// ファイル名に使えない文字
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r#"[\\/:*?"<>|\x00-\x1f]"#).unwrap();
}

/// `{コース名}-{コースID}.xlsx`
pub fn report_file_name(course_name: &str, course_id: u64) -> String {
    let name = UNSAFE_FILE_CHARS.replace_all(course_name.trim(), "_");
    format!("{}-{}.xlsx", name, course_id)
}

/// レポートをExcelファイルに書き出し、出力パスを返す
pub fn export_report(report: &AttendanceReport, output: &Path) -> Result<PathBuf> {
    let file_name = report_file_name(&report.course.name, report.course.id);
    let output_path = output_path_for(output, &file_name)?;

    let buffer = generate_report_buffer(report).map_err(ReportError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, buffer)?;

    tracing::info!(
        path = %output_path.display(),
        mime = XLSX_MIME,
        rows = report.rows.len(),
        "report written"
    );
    Ok(output_path)
}
