//! 名簿スナップショット
//!
//! 取得済みの名簿とコース情報をJSONに保存し、オフラインで再利用する。

use crate::error::{Error, Result};
use crate::types::{CourseInfo, RosterEntry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// スナップショットファイルの構造
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// バージョン（互換性チェック用）
    pub version: u32,
    /// 取得日時（RFC 3339）
    #[serde(default)]
    pub fetched_at: String,
    pub course: CourseInfo,
    pub students: Vec<RosterEntry>,
}

impl RosterSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(course: CourseInfo, students: Vec<RosterEntry>, fetched_at: String) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            fetched_at,
            course,
            students,
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()
    }

    /// JSONファイルから読み込み
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Self = serde_json::from_reader(reader)?;
        snapshot.check_version()
    }

    /// JSONファイルに保存
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// 要求されたコースのスナップショットか確認
    pub fn ensure_course(&self, course_id: u64) -> Result<()> {
        if self.course.id != course_id {
            return Err(Error::Snapshot(format!(
                "snapshot is for course {} but course {} was requested",
                self.course.id, course_id
            )));
        }
        Ok(())
    }

    fn check_version(self) -> Result<Self> {
        if self.version != Self::CURRENT_VERSION {
            return Err(Error::Snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                self.version,
                Self::CURRENT_VERSION
            )));
        }
        Ok(self)
    }
}
