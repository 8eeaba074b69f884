pub mod excel;

pub use excel::{export_report, report_file_name, XLSX_MIME};

use crate::error::{ReportError, Result};
use std::path::{is_separator, Path, PathBuf};

/// 出力先を決める
///
/// 既存ディレクトリか末尾が区切り文字ならその中に `file_name`、
/// それ以外は `.xlsx` のファイルパスのみ受け付ける
fn output_path_for(output: &Path, file_name: &str) -> Result<PathBuf> {
    let ends_with_separator = output
        .as_os_str()
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(is_separator);

    if output.is_dir() || ends_with_separator {
        return Ok(output.join(file_name));
    }

    let is_xlsx = output
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        Ok(output.to_path_buf())
    } else {
        Err(ReportError::InvalidOutputPath(output.display().to_string()))
    }
}
