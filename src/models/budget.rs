use std::path::PathBuf;

use crate::models::entry::Entry;
use crate::utils::reconcile::dedupe_preserving_order;

// 流程各階段的排除模式集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    pub default_excludes: Vec<String>,
    pub extra_excludes: Vec<String>,
    pub selected_excludes: Vec<String>,
}

impl ExcludeSet {
    pub fn new(default_excludes: Vec<String>, extra_excludes: Vec<String>) -> Self {
        ExcludeSet {
            default_excludes,
            extra_excludes,
            selected_excludes: Vec::new(),
        }
    }

    /// 互動選擇前套用的基準排除（預設 + 使用者額外指定）
    pub fn baseline(&self) -> Vec<String> {
        dedupe_preserving_order(
            self.default_excludes
                .iter()
                .chain(self.extra_excludes.iter())
                .cloned(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct BudgetInput {
    pub root: PathBuf,
    pub budget_bytes: u64,
    pub skip_dirs: Vec<String>,
    pub excludes: ExcludeSet,
    pub auto_exclude: bool,
    pub top: usize,
    pub no_progress: bool,
}

#[derive(Debug, Clone)]
pub struct BudgetOutput {
    pub entry_count: usize,
    pub skipped_dirs: Vec<String>,
    pub baseline_size: u64,
    /// 自動排除的檔案，依挑選順序
    pub planned: Vec<Entry>,
    pub overridden: Vec<String>,
    pub final_excludes: Vec<String>,
    pub final_size: u64,
    pub budget_bytes: u64,
}

impl BudgetOutput {
    pub fn within_budget(&self) -> bool {
        self.final_size <= self.budget_bytes
    }
}
