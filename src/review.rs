//! 対話式レビューモジュール
//!
//! 突合結果を表示し、参加フラグを人手で修正する。
//! フラグは「参加 / 不参加」の2値のみ選択できる。

use crate::error::{ReportError, Result};
use attendance_common::{Participation, ReportRow};
use dialoguer::{Confirm, MultiSelect};
use std::collections::HashSet;

/// 表の1行を整形
pub fn format_row(index: usize, row: &ReportRow) -> String {
    format!(
        "{:>3}. {} {} | {} | {}",
        index + 1,
        row.first_names,
        row.last_name,
        row.matched_name.as_deref().unwrap_or("-"),
        row.participation.mark()
    )
}

/// 突合結果を表示
pub fn print_results(rows: &[ReportRow]) {
    println!("Resultados:");
    for (i, row) in rows.iter().enumerate() {
        println!("  {}", format_row(i, row));
    }
}

/// 使われなかった出席ファイルの名前を表示
pub fn print_unused_names(names: &[String]) {
    if names.is_empty() {
        println!("✔ Todos los nombres del archivo fueron asignados");
        return;
    }

    println!("Nombres sin match en el archivo ({}):", names.len());
    for name in names {
        println!("  - {}", name);
    }
}

/// 選択された行を参加、それ以外を不参加にする
pub fn apply_participation(rows: &mut [ReportRow], selected: &[usize]) {
    let selected: HashSet<usize> = selected.iter().copied().collect();
    for (i, row) in rows.iter_mut().enumerate() {
        row.participation = Participation::from(selected.contains(&i));
    }
}

/// 対話式で参加フラグを修正
///
/// 修正がなければそのまま返す
pub fn run_review(rows: &mut [ReportRow]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let wants_edit = Confirm::new()
        .with_prompt("¿Corregir la participación antes de exportar?")
        .default(false)
        .interact()
        .map_err(|e| ReportError::Prompt(e.to_string()))?;

    if !wants_edit {
        return Ok(());
    }

    let items: Vec<String> = rows
        .iter()
        .map(|r| {
            format!(
                "{} {} ({})",
                r.first_names,
                r.last_name,
                r.matched_name.as_deref().unwrap_or("sin match")
            )
        })
        .collect();
    let defaults: Vec<bool> = rows
        .iter()
        .map(|r| r.participation.is_participated())
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Marca quién participó ([Espacio] cambiar, [Enter] confirmar)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| ReportError::Prompt(e.to_string()))?;

    let before: Vec<Participation> = rows.iter().map(|r| r.participation).collect();
    apply_participation(rows, &selected);

    let changed = rows
        .iter()
        .zip(before)
        .filter(|(row, prev)| row.participation != *prev)
        .count();
    println!("✔ {} fila(s) modificada(s)\n", changed);

    Ok(())
}
