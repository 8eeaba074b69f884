//! 出席突合モジュール
//!
//! 名簿の各学生について、出席ファイルの名前を元の順序で走査し、
//! 閾値を超えた最初の名前を割り当てる（貪欲な先着割当て）。
//!
//! ## 処理フロー
//! 1. 名簿順に学生を処理
//! 2. 未使用の名前を順に `best_match` で照合
//! 3. 最初に閾値以上となった名前を使用済みにして次の学生へ
//! 4. どの学生にも使われなかった名前を診断用に返す

use crate::error::{Error, Result};
use crate::matcher::best_match;
use crate::types::{ReportRow, RosterEntry};
use std::collections::{BTreeSet, HashSet};

/// 一致とみなす類似度の下限（0-100）
pub const DEFAULT_MATCH_FLOOR: f64 = 50.0;

/// 突合オプション
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// この値以上の類似度で一致とみなす
    pub floor: f64,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            floor: DEFAULT_MATCH_FLOOR,
        }
    }
}

impl ReconcileOptions {
    /// 閾値を指定して作成（0-100の範囲外はエラー）
    pub fn with_floor(floor: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&floor) {
            return Err(Error::Config(format!(
                "match floor must be between 0 and 100 (got {})",
                floor
            )));
        }
        Ok(Self { floor })
    }
}

/// 突合結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// 名簿1件につき1行（名簿順）
    pub rows: Vec<ReportRow>,
    /// 使用済みの出席ファイル名
    pub consumed: BTreeSet<String>,
    /// 使われなかった出席ファイル名（元の順序）
    pub unused_names: Vec<String>,
}

/// 名簿と出席ファイルの名前を突合する
///
/// 使用済みの名前は後続の学生では照合しないため、各名前は最大1回だけ使われる。
/// 入力が同じなら結果も同じ（順序依存だが決定的）。
pub fn reconcile(
    roster: &[RosterEntry],
    uploaded: &[String],
    options: &ReconcileOptions,
) -> Reconciliation {
    let mut consumed: BTreeSet<String> = BTreeSet::new();
    let mut rows = Vec::with_capacity(roster.len());

    for entry in roster {
        let target = [entry.name.as_str()];

        let matched = uploaded
            .iter()
            .filter(|name| !consumed.contains(name.as_str()))
            .find(|name| {
                best_match(name.as_str(), &target).is_some_and(|m| m.score >= options.floor)
            })
            .cloned();

        if let Some(name) = &matched {
            consumed.insert(name.clone());
        }

        rows.push(ReportRow::from_entry(entry, matched));
    }

    let unused_names = uploaded
        .iter()
        .filter(|name| !consumed.contains(name.as_str()))
        .cloned()
        .collect();

    Reconciliation {
        rows,
        consumed,
        unused_names,
    }
}

/// 完全一致で重複を除去（最初の出現を残す）
pub fn dedup_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(Into::<String>::into)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
