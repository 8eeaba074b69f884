//! レポートExcelのレイアウト定数

/// シート名
pub const SHEET_NAME: &str = "Asistencia";

/// データ列数（名・姓・照合名・参加）
pub const COLUMN_COUNT: u16 = 4;

/// 全列共通の列幅（Excel文字幅単位）
pub const COLUMN_WIDTH: f64 = 30.0;

/// ヘッダー行（0始まり）
pub const COURSE_ROW: u32 = 0;
pub const ACCOUNT_ROW: u32 = 1;

/// データ開始行（ヘッダー2行 + 空行1行の次）
pub const DATA_START_ROW: u32 = 3;

/// 参加フラグ列（0始まり）
pub const PARTICIPATION_COL: u16 = 3;

/// 参加セルの塗りつぶし色
pub const PARTICIPATED_FILL: u32 = 0x27AE60;
pub const NOT_PARTICIPATED_FILL: u32 = 0xCB4821;

/// コース見出し
pub fn course_heading(course_name: &str, course_id: u64) -> String {
    format!("Diplomado: {} (ID: {})", course_name, course_id)
}

/// サブアカウント見出し
pub fn account_heading(account_id: u64) -> String {
    format!("Subcuenta: {}", account_id)
}
