use std::collections::HashSet;

use crate::models::selection::Reconciliation;

/// 去除重複，保留第一次出現的順序
pub fn dedupe_preserving_order<I>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    patterns
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// 合併預設、額外與使用者最終選擇的排除模式。
///
/// 使用者的選擇具最終決定權：自動排除但未被保留勾選的路徑列入 `overridden`，
/// 且不會出現在最終排除清單中（除非其他模式本就涵蓋）。
pub fn reconcile(
    default_excludes: &[String],
    extra_excludes: &[String],
    human_selection: &[String],
    planned: &[String],
) -> Reconciliation {
    let final_excludes = dedupe_preserving_order(
        default_excludes
            .iter()
            .chain(extra_excludes)
            .chain(human_selection)
            .cloned(),
    );
    Reconciliation {
        final_excludes,
        overridden: overridden(planned, human_selection),
    }
}

pub fn overridden(planned: &[String], human_selection: &[String]) -> Vec<String> {
    let selected: HashSet<&str> = human_selection.iter().map(String::as_str).collect();
    planned
        .iter()
        .filter(|p| !selected.contains(p.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn union_dedupes_first_occurrence_wins() {
        let result = reconcile(
            &strings(&["node_modules/**", "*.log"]),
            &strings(&["docs/**", "*.log"]),
            &strings(&["big.bin", "docs/**", "assets/**"]),
            &[],
        );
        assert_eq!(
            result.final_excludes,
            strings(&["node_modules/**", "*.log", "docs/**", "big.bin", "assets/**"])
        );
        assert!(result.overridden.is_empty());
    }

    #[test]
    fn reports_planned_items_the_human_unchecked() {
        let result = reconcile(
            &strings(&["node_modules/**"]),
            &[],
            &strings(&["A"]),
            &strings(&["A", "B"]),
        );
        assert_eq!(result.overridden, strings(&["B"]));
        assert!(result.final_excludes.contains(&"A".to_string()));
        assert!(!result.final_excludes.contains(&"B".to_string()));
    }

    #[test]
    fn dedupe_keeps_order() {
        let deduped = dedupe_preserving_order(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(deduped, strings(&["b", "a", "c"]));
    }
}
