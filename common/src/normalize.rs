//! 名前の正規化と類似度
//!
//! - 正規化: 小文字化 → アクセント除去（ASCII音訳） → 空白分割 → 集合
//! - 類似度: トークンをソートしてから Indel 距離ベースの比率（0-100）

use deunicode::deunicode;
use std::collections::BTreeSet;

/// 名前をトークン集合に正規化する
///
/// 順序と重複は捨てる
pub fn normalize_tokens(name: &str) -> BTreeSet<String> {
    deunicode(&name.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// トークン順序に依存しない類似度（0-100）
///
/// 元の文字列のまま比較する（大文字・アクセントは区別される）
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}

/// 正規化 Indel 類似度（0-100）
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }

    let distance = indel_distance(a, b);
    100.0 * (1.0 - distance as f64 / total as f64)
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// 挿入・削除のみの編集距離
fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            matrix[i][j] = if a_chars[i - 1] == b_chars[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                (matrix[i - 1][j] + 1).min(matrix[i][j - 1] + 1)
            };
        }
    }

    matrix[a_len][b_len]
}
