use log::{debug, info};

use crate::models::entry::Entry;
use crate::utils::matcher::PatternSet;
use crate::utils::utils::format_file_size;

/// 目標為預算的 95%
pub const SAFETY_MARGIN: f64 = 0.95;

pub fn target_size(budget_bytes: u64) -> f64 {
    budget_bytes as f64 * SAFETY_MARGIN
}

/// 由大到小貪婪挑選要排除的檔案，直到預估大小不超過目標或無候選為止。
///
/// 只挑選檔案，不挑選目錄。回傳挑選順序（最大者優先）的路徑，
/// 僅作為互動選單的預設勾選。
pub fn plan(
    entries: &[Entry],
    baseline: &PatternSet,
    current_size: u64,
    budget_bytes: u64,
    enabled: bool,
) -> Vec<String> {
    if !enabled || current_size <= budget_bytes {
        return Vec::new();
    }

    let target = target_size(budget_bytes);
    let mut candidates: Vec<&Entry> = entries
        .iter()
        .filter(|e| !e.is_directory && !baseline.is_match(&e.path))
        .collect();
    candidates.sort_by(|a, b| b.size.cmp(&a.size));

    let mut remaining = current_size;
    let mut excluded = Vec::new();
    for candidate in candidates {
        if remaining as f64 <= target {
            break;
        }
        debug!("自動排除：{}（{}）", candidate.path, format_file_size(candidate.size));
        remaining = remaining.saturating_sub(candidate.size);
        excluded.push(candidate.path.clone());
    }

    info!(
        "自動排除 {} 個檔案，預估大小 {} → {}",
        excluded.len(),
        format_file_size(current_size),
        format_file_size(remaining)
    );
    excluded
}
