use std::collections::HashMap;
use std::io;

use log::{info, warn};

use crate::config::ports::SelectionPort;
use crate::facade::traits::i_budget::BudgetFacadeTrait;
use crate::models::budget::{BudgetInput, BudgetOutput};
use crate::models::entry::Entry;
use crate::service::selection_service::build_selection_items;
use crate::utils::estimate::estimate;
use crate::utils::matcher::PatternSet;
use crate::utils::planner::plan;
use crate::utils::reconcile::reconcile;
use crate::utils::scan::{is_skipped_dir, normalize_skip_dirs, scan};
use crate::utils::utils::format_file_size;

pub struct BudgetFacade {
    selection: Box<dyn SelectionPort>,
}

impl BudgetFacade {
    pub fn new(selection: Box<dyn SelectionPort>) -> Self {
        BudgetFacade { selection }
    }
}

impl BudgetFacadeTrait for BudgetFacade {
    fn execute_budget(&self, input: BudgetInput) -> io::Result<BudgetOutput> {
        info!("開始掃描目錄：{}", input.root.display());
        let entries = scan(&input.root, &input.skip_dirs, input.no_progress)?;

        let skip_set = normalize_skip_dirs(&input.skip_dirs);
        let skipped_dirs: Vec<String> = entries
            .iter()
            .filter(|e| e.is_directory && is_skipped_dir(&e.path, &skip_set))
            .map(|e| e.path.clone())
            .collect();

        let baseline_patterns = input.excludes.baseline();
        let baseline = PatternSet::new(&baseline_patterns);
        let baseline_size = estimate(&entries, &baseline);
        info!(
            "基準預估大小：{}（上限 {}），共 {} 個項目",
            format_file_size(baseline_size),
            format_file_size(input.budget_bytes),
            entries.len()
        );

        let planned_paths = plan(
            &entries,
            &baseline,
            baseline_size,
            input.budget_bytes,
            input.auto_exclude,
        );
        let files: HashMap<&str, &Entry> = entries
            .iter()
            .filter(|e| !e.is_directory)
            .map(|e| (e.path.as_str(), e))
            .collect();
        let planned: Vec<Entry> = planned_paths
            .iter()
            .filter_map(|path| files.get(path.as_str()).map(|e| (*e).clone()))
            .collect();

        let items = build_selection_items(&entries, &baseline, &planned_paths, input.top);
        let selected = if items.is_empty() {
            Vec::new()
        } else {
            self.selection.select(&items)?
        };

        let mut excludes = input.excludes.clone();
        excludes.selected_excludes = selected;
        let reconciliation = reconcile(
            &excludes.default_excludes,
            &excludes.extra_excludes,
            &excludes.selected_excludes,
            &planned_paths,
        );
        for path in &reconciliation.overridden {
            info!("使用者保留自動排除的項目：{}", path);
        }

        let final_size = estimate(&entries, &PatternSet::new(&reconciliation.final_excludes));
        if final_size > input.budget_bytes {
            warn!(
                "最終預估大小 {} 仍超過上限 {}",
                format_file_size(final_size),
                format_file_size(input.budget_bytes)
            );
        } else {
            info!("最終預估大小：{}", format_file_size(final_size));
        }

        Ok(BudgetOutput {
            entry_count: entries.len(),
            skipped_dirs,
            baseline_size,
            planned,
            overridden: reconciliation.overridden,
            final_excludes: reconciliation.final_excludes,
            final_size,
            budget_bytes: input.budget_bytes,
        })
    }
}
