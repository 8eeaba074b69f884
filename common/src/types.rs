//! 出席レポートの型定義
//!
//! - RosterEntry: 名簿APIから取得した学生
//! - CourseInfo: コース情報（名前・サブアカウント）
//! - ReportRow: Excelに出力される1行
//! - AttendanceReport: 出力単位（コース + 全行 + 未使用名）

use serde::{Deserialize, Serialize};

/// 名簿の学生エントリ
///
/// APIレスポンスの余分なフィールドは無視する
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u64,

    /// 表示名（照合対象）
    #[serde(default)]
    pub name: String,

    /// "姓, 名" 形式
    #[serde(default)]
    pub sortable_name: String,
}

impl RosterEntry {
    /// sortable_name を (姓, 名) に分割
    ///
    /// 最初のカンマより前が姓、次の区間が名。欠けている部分は空文字。
    pub fn split_sortable_name(&self) -> (String, String) {
        let mut parts = self.sortable_name.split(',');
        let last = parts.next().unwrap_or("").trim().to_string();
        let first = parts.next().unwrap_or("").trim().to_string();
        (last, first)
    }
}

/// コース情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    /// サブアカウントID
    #[serde(default)]
    pub account_id: u64,
}

/// 参加フラグ（2値のみ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participation {
    Participated,
    #[default]
    NotParticipated,
}

impl Participation {
    /// レビュー表示用マーク
    pub fn mark(&self) -> &'static str {
        match self {
            Participation::Participated => "✔️",
            Participation::NotParticipated => "❌",
        }
    }

    /// Excel出力用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Participation::Participated => "Participo",
            Participation::NotParticipated => "No Participo",
        }
    }

    pub fn is_participated(&self) -> bool {
        matches!(self, Participation::Participated)
    }
}

impl From<bool> for Participation {
    fn from(participated: bool) -> Self {
        if participated {
            Participation::Participated
        } else {
            Participation::NotParticipated
        }
    }
}

impl std::fmt::Display for Participation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// レポート1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 名（Nombres）
    pub first_names: String,
    /// 姓（Apellido）
    pub last_name: String,
    /// 照合された出席ファイル側の名前
    pub matched_name: Option<String>,
    pub participation: Participation,
}

impl ReportRow {
    /// 名簿エントリから行を作成
    ///
    /// 照合名があれば参加、なければ不参加
    pub fn from_entry(entry: &RosterEntry, matched_name: Option<String>) -> Self {
        let (last_name, first_names) = entry.split_sortable_name();
        let participation = Participation::from(matched_name.is_some());
        Self {
            first_names,
            last_name,
            matched_name,
            participation,
        }
    }
}

/// 出力単位
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub course: CourseInfo,
    pub rows: Vec<ReportRow>,
    /// どの学生にも使われなかった出席ファイルの名前
    pub unused_names: Vec<String>,
}

impl AttendanceReport {
    pub fn participated_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.participation.is_participated())
            .count()
    }
}
