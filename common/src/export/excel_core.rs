//! Excel生成（共通ライブラリ）
//!
//! layout.rs の定義を使用して出席レポート形式のExcelを生成
//!
//! ## シート構成
//! - 1行目: コース名とID（太字）
//! - 2行目: サブアカウントID（太字）
//! - 3行目: 空行
//! - 4行目以降: 学生1人1行（罫線付き、参加セルは緑/赤）

use crate::layout::{
    account_heading, course_heading, ACCOUNT_ROW, COLUMN_COUNT, COLUMN_WIDTH, COURSE_ROW,
    DATA_START_ROW, NOT_PARTICIPATED_FILL, PARTICIPATED_FILL, PARTICIPATION_COL, SHEET_NAME,
};
use crate::types::{AttendanceReport, Participation};
use rust_xlsxwriter::*;

/// Excelをバッファに生成
pub fn generate_report_buffer(report: &AttendanceReport) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let heading_format = Format::new().set_bold();

    let cell_format = Format::new().set_border(FormatBorder::Thin);

    let participated_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(PARTICIPATED_FILL));

    let not_participated_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(NOT_PARTICIPATED_FILL));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for col in 0..COLUMN_COUNT {
        worksheet
            .set_column_width(col, COLUMN_WIDTH)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // 見出し
    let course = &report.course;
    worksheet
        .write_string_with_format(
            COURSE_ROW,
            0,
            course_heading(&course.name, course.id),
            &heading_format,
        )
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    worksheet
        .write_string_with_format(
            ACCOUNT_ROW,
            0,
            account_heading(course.account_id),
            &heading_format,
        )
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

    // 学生行
    for (i, row) in report.rows.iter().enumerate() {
        let excel_row = DATA_START_ROW + i as u32;

        worksheet
            .write_string_with_format(excel_row, 0, &row.first_names, &cell_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet
            .write_string_with_format(excel_row, 1, &row.last_name, &cell_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;

        // 照合名なしは罫線付きの空セル
        let written = match &row.matched_name {
            Some(name) => worksheet.write_string_with_format(excel_row, 2, name, &cell_format),
            None => worksheet.write_blank(excel_row, 2, &cell_format),
        };
        written.map_err(|e| format!("値書き込みエラー: {}", e))?;

        let participation_format = match row.participation {
            Participation::Participated => &participated_format,
            Participation::NotParticipated => &not_participated_format,
        };
        worksheet
            .write_string_with_format(
                excel_row,
                PARTICIPATION_COL,
                row.participation.label(),
                participation_format,
            )
            .map_err(|e| format!("参加セル書き込みエラー: {}", e))?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
