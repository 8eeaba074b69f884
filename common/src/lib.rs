//! Attendance Report Common Library
//!
//! 名簿照合のコアロジック（I/Oなし）:
//! 名前の正規化・照合、出席突合、Excelバッファ生成

pub mod types;
pub mod layout;
pub mod error;
pub mod normalize;
pub mod matcher;
pub mod reconcile;
pub mod snapshot;
pub mod export;

pub use types::{AttendanceReport, CourseInfo, Participation, ReportRow, RosterEntry};
pub use error::{Error, Result};
pub use normalize::{normalize_tokens, token_sort_ratio};
pub use matcher::{best_match, MatchCandidate};
pub use reconcile::{dedup_names, reconcile, ReconcileOptions, Reconciliation, DEFAULT_MATCH_FLOOR};
pub use snapshot::RosterSnapshot;
