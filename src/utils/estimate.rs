use crate::models::entry::Entry;
use crate::utils::matcher::PatternSet;

pub const OVERHEAD_PER_ENTRY: u64 = 100;
pub const MAX_OVERHEAD: u64 = 50 * 1024;

/// 每個項目約 100 位元組的格式化開銷，上限 50 KiB
pub fn overhead(entry_count: usize) -> u64 {
    (entry_count as u64)
        .saturating_mul(OVERHEAD_PER_ENTRY)
        .min(MAX_OVERHEAD)
}

/// 預估輸出大小：未被排除的檔案大小總和加上格式化開銷。
/// 目錄本身不計入，只計算其下的檔案。
pub fn estimate(entries: &[Entry], excludes: &PatternSet) -> u64 {
    let content: u64 = entries
        .iter()
        .filter(|e| !e.is_directory && !excludes.is_match(&e.path))
        .map(|e| e.size)
        .sum();
    content + overhead(entries.len())
}

pub fn estimate_with<S: AsRef<str>>(entries: &[Entry], patterns: &[S]) -> u64 {
    estimate(entries, &PatternSet::new(patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::directory("dist", 700),
            Entry::file("dist/app.min.js", 700),
            Entry::file("a.txt", 300),
            Entry::file("b.txt", 200),
        ]
    }

    #[test]
    fn no_patterns_sums_all_files_plus_overhead() {
        let entries = sample();
        assert_eq!(estimate_with::<&str>(&entries, &[]), 1200 + 400);
    }

    #[test]
    fn excluded_files_do_not_count_and_directories_never_do() {
        let entries = sample();
        assert_eq!(estimate_with(&entries, &["dist/**"]), 500 + 400);
        assert_eq!(estimate_with(&entries, &["a.txt", "**/*.min.js"]), 200 + 400);
    }

    #[test]
    fn estimate_is_deterministic() {
        let entries = sample();
        let set = PatternSet::new(&["b.txt"]);
        assert_eq!(estimate(&entries, &set), estimate(&entries, &set));
    }

    #[test]
    fn overhead_is_capped() {
        assert_eq!(overhead(0), 0);
        assert_eq!(overhead(12), 1200);
        assert_eq!(overhead(10_000), 50 * 1024);

        let entries: Vec<Entry> = (0..10_000).map(|i| Entry::file(format!("f{}", i), 1)).collect();
        assert_eq!(estimate_with::<&str>(&entries, &[]), 10_000 + 50 * 1024);
    }
}
