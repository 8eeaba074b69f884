//! 名前照合
//!
//! 包含チェックで候補を絞り込んでから類似度で最良一致を選ぶ。
//! - 1トークンの候補: そのトークンが対象に含まれれば対象にする
//! - 複数トークンの候補: 全トークンが対象に含まれる場合のみ対象にする

use crate::normalize::{normalize_tokens, token_sort_ratio};
use std::collections::BTreeSet;

/// 照合結果
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub target: String,
    /// 類似度（0-100）
    pub score: f64,
}

/// 候補トークンが対象トークンに対して照合対象になるか
pub fn is_eligible(candidate: &BTreeSet<String>, target: &BTreeSet<String>) -> bool {
    match candidate.len() {
        0 => false,
        1 => candidate.iter().any(|token| target.contains(token)),
        _ => candidate.is_subset(target),
    }
}

/// 対象リストから最も類似する名前を探す
///
/// 同点は先の対象を優先。対象になる名前がない、またはスコア0の場合は `None`
pub fn best_match<S: AsRef<str>>(candidate: &str, targets: &[S]) -> Option<MatchCandidate> {
    let candidate_parts = normalize_tokens(candidate);
    let mut best: Option<MatchCandidate> = None;

    for target in targets {
        let target = target.as_ref();
        let target_parts = normalize_tokens(target);

        if !is_eligible(&candidate_parts, &target_parts) {
            continue;
        }

        let score = token_sort_ratio(candidate, target);
        let highest = best.as_ref().map_or(0.0, |b| b.score);
        if score > highest {
            best = Some(MatchCandidate {
                target: target.to_string(),
                score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_loose_containment() {
        let result = best_match("Ana", &["Ana Maria Lopez", "Juan Perez"]).unwrap();
        assert_eq!(result.target, "Ana Maria Lopez");
        // "Ana" vs "Ana Lopez Maria": 2 * 3 / 18
        assert!((result.score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_token_not_contained() {
        assert_eq!(best_match("Pedro", &["Ana Maria Lopez", "Juan Perez"]), None);
    }

    #[test]
    fn test_multi_token_requires_subset() {
        assert_eq!(best_match("Johnny Smithers", &["John Smith"]), None);
        assert_eq!(best_match("John Smith Jr", &["John Smith"]), None);

        let result = best_match("John Smith", &["John Smith"]).unwrap();
        assert!((result.score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_multi_token_subset_of_longer_target() {
        let result = best_match("Maria Lopez", &["Ana Maria Lopez"]).unwrap();
        assert_eq!(result.target, "Ana Maria Lopez");
    }

    #[test]
    fn test_diacritics_do_not_block_eligibility() {
        let result = best_match("Maria Garcia", &["María García"]).unwrap();
        assert!(result.score >= 50.0);
    }

    #[test]
    fn test_picks_highest_score() {
        let targets = ["Juan Carlos Perez Soto", "Juan Perez"];
        let result = best_match("Juan Perez", &targets).unwrap();
        assert_eq!(result.target, "Juan Perez");
    }

    #[test]
    fn test_tie_keeps_first_target() {
        let targets = ["Juan Perez", "Perez Juan"];
        let result = best_match("Juan Perez", &targets).unwrap();
        assert_eq!(result.target, "Juan Perez");
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        assert_eq!(best_match("", &["John Smith"]), None);
        assert_eq!(best_match("   ", &["John Smith"]), None);
    }

    #[test]
    fn test_empty_targets() {
        let targets: [&str; 0] = [];
        assert_eq!(best_match("John Smith", &targets), None);
    }

    #[test]
    fn test_is_eligible() {
        let set = |s: &str| normalize_tokens(s);
        assert!(is_eligible(&set("ana"), &set("Ana Maria Lopez")));
        assert!(!is_eligible(&set("ana"), &set("Juan Perez")));
        assert!(is_eligible(&set("lopez ana"), &set("Ana Maria Lopez")));
        assert!(!is_eligible(&set("lopez pedro"), &set("Ana Maria Lopez")));
        assert!(!is_eligible(&set(""), &set("Ana Maria Lopez")));
    }
}
