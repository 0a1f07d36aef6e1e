use std::collections::HashSet;
use std::io;

use crate::config::ports::SelectionPort;
use crate::models::entry::Entry;
use crate::models::selection::SelectionItem;
use crate::utils::matcher::PatternSet;
use crate::utils::utils::format_file_size;

/// 建立互動選單的選項。
///
/// 列出未被基準排除的前 `top` 大項目，並確保所有自動排除的檔案都在清單中。
/// 自動排除的項目預設勾選。
pub fn build_selection_items(
    entries: &[Entry],
    baseline: &PatternSet,
    planned: &[String],
    top: usize,
) -> Vec<SelectionItem> {
    let planned_set: HashSet<&str> = planned.iter().map(String::as_str).collect();
    let mut shown: HashSet<&str> = HashSet::new();
    let mut items = Vec::new();

    let visible = entries
        .iter()
        .filter(|e| !baseline.is_match(&e.path))
        .take(top);
    for entry in visible {
        shown.insert(entry.path.as_str());
        items.push(to_item(entry, planned_set.contains(entry.path.as_str())));
    }

    for entry in entries.iter().filter(|e| !e.is_directory) {
        if planned_set.contains(entry.path.as_str()) && !shown.contains(entry.path.as_str()) {
            shown.insert(entry.path.as_str());
            items.push(to_item(entry, true));
        }
    }
    items
}

fn to_item(entry: &Entry, pre_checked: bool) -> SelectionItem {
    let display = if entry.is_directory {
        format!("{}/", entry.path)
    } else {
        entry.path.clone()
    };
    SelectionItem {
        label: format!("{:>10}  {}", format_file_size(entry.size), display),
        value: entry.selection_value(),
        pre_checked,
    }
}

// 非互動模式：直接接受預選結果
pub struct AutoAcceptSelection;

impl SelectionPort for AutoAcceptSelection {
    fn select(&self, items: &[SelectionItem]) -> io::Result<Vec<String>> {
        Ok(items
            .iter()
            .filter(|item| item.pre_checked)
            .map(|item| item.value.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::directory("docs", 900),
            Entry::file("docs/guide.md", 900),
            Entry::file("a.txt", 300),
            Entry::file("b.txt", 200),
            Entry::directory("node_modules", 0),
        ]
    }

    #[test]
    fn directories_carry_subtree_values() {
        let items = build_selection_items(&entries(), &PatternSet::new(&["node_modules/**"]), &[], 10);
        let values: Vec<&str> = items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["docs/**", "docs/guide.md", "a.txt", "b.txt"]);
        assert!(items[0].label.ends_with("docs/"));
        assert!(items.iter().all(|i| !i.pre_checked));
    }

    #[test]
    fn planned_files_are_prechecked_even_outside_top_window() {
        let planned = vec!["b.txt".to_string()];
        let items = build_selection_items(&entries(), &PatternSet::default(), &planned, 2);
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].value, "b.txt");
        assert!(items[2].pre_checked);
        assert!(!items[0].pre_checked);
    }

    #[test]
    fn auto_accept_returns_prechecked_values() {
        let planned = vec!["a.txt".to_string()];
        let items = build_selection_items(&entries(), &PatternSet::default(), &planned, 10);
        let selected = AutoAcceptSelection.select(&items).unwrap();
        assert_eq!(selected, vec!["a.txt"]);
    }
}
