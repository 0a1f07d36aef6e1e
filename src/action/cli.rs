use std::io;
use std::path::Path;

use clap::Parser;
use console::style;

use crate::action::interactive::{confirm_execution, DialoguerSelection};
use crate::config::config::{clean_patterns, validate_input_path, validate_limit, Cli};
use crate::config::defaults::{default_excludes, default_skip_dirs};
use crate::config::ports::{AppConfig, CommandPort, ConfigPort, SelectionPort};
use crate::facade::budget_facade::BudgetFacade;
use crate::facade::traits::i_budget::BudgetFacadeTrait;
use crate::models::budget::{BudgetInput, BudgetOutput, ExcludeSet};
use crate::service::config_service::ConfigService;
use crate::service::selection_service::AutoAcceptSelection;
use crate::utils::command::{build_command, ProcessCommandAdapter};
use crate::utils::utils::{format_file_size, setup_logging};

pub fn process_args(args: Vec<String>) -> io::Result<BudgetOutput> {
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let selection: Box<dyn SelectionPort> = if config.assume_yes {
        Box::new(AutoAcceptSelection)
    } else if !console::user_attended() {
        log::warn!("非互動終端，直接接受預選結果");
        Box::new(AutoAcceptSelection)
    } else {
        Box::new(DialoguerSelection)
    };

    run(&config, selection, &ProcessCommandAdapter)
}

/// 執行大小控制流程、輸出摘要並建立（必要時執行）轉換指令
pub fn run(
    config: &AppConfig,
    selection: Box<dyn SelectionPort>,
    command_port: &dyn CommandPort,
) -> io::Result<BudgetOutput> {
    let facade = BudgetFacade::new(selection);
    let output = facade.execute_budget(BudgetInput {
        root: config.directory.clone(),
        budget_bytes: config.budget_bytes,
        skip_dirs: config.skip_dirs.clone(),
        excludes: ExcludeSet::new(config.default_excludes.clone(), config.extra_excludes.clone()),
        auto_exclude: config.auto_exclude,
        top: config.top,
        no_progress: config.no_progress,
    })?;

    print_summary(&output);

    let directory = config.directory.to_string_lossy();
    let command = build_command(
        &config.converter,
        &directory,
        &output.final_excludes,
        &config.include,
        config.output.as_deref(),
    );
    let command_line = command.display();

    if config.dry_run {
        println!("{}", command_line);
        return Ok(output);
    }
    if !config.assume_yes && console::user_attended() && !confirm_execution(&command_line)? {
        println!("{}", style("已取消，未執行轉換。").yellow());
        return Ok(output);
    }
    command_port.run(&command)?;
    println!("{}", style("轉換完成！").green());
    Ok(output)
}

fn print_summary(output: &BudgetOutput) {
    println!(
        "已掃描 {} 個項目，跳過 {} 個目錄",
        output.entry_count,
        output.skipped_dirs.len()
    );
    let baseline_line = format!(
        "基準預估大小：{} / 上限 {}",
        format_file_size(output.baseline_size),
        format_file_size(output.budget_bytes)
    );
    if output.baseline_size > output.budget_bytes {
        println!("{}", style(baseline_line).yellow());
    } else {
        println!("{}", style(baseline_line).green());
    }

    if !output.planned.is_empty() {
        println!("自動排除 {} 個檔案：", output.planned.len());
        for entry in &output.planned {
            println!("  {:>10}  {}", format_file_size(entry.size), entry.path);
        }
    }
    if !output.overridden.is_empty() {
        println!(
            "{}",
            style(format!("保留 {} 個自動排除的項目：", output.overridden.len())).cyan()
        );
        for path in &output.overridden {
            println!("  {}", path);
        }
    }

    let final_line = format!(
        "最終預估大小：{} / 上限 {}",
        format_file_size(output.final_size),
        format_file_size(output.budget_bytes)
    );
    if output.within_budget() {
        println!("{}", style(final_line).green());
    } else {
        println!("{}", style(format!("{}（超過上限）", final_line)).red());
    }
}

/// 分類額外排除：存在於磁碟上的目錄名稱升級為跳過目錄與 `dir/**` 模式，
/// 其餘原樣視為模式。回傳（跳過目錄, 額外排除模式）。
pub fn resolve_extra_excludes(root: &Path, extra: &[String]) -> (Vec<String>, Vec<String>) {
    let mut skip_dirs = Vec::new();
    let mut patterns = Vec::new();
    for raw in extra {
        let name = raw.strip_suffix("/**").unwrap_or(raw).trim_matches('/');
        if !name.is_empty() && !name.contains('*') && root.join(name).is_dir() {
            skip_dirs.push(name.to_string());
            patterns.push(format!("{}/**", name));
        } else {
            patterns.push(raw.clone());
        }
    }
    (skip_dirs, patterns)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let directory = validate_input_path(&self.cli.directory)?.to_path_buf();
        let budget_bytes = validate_limit(self.cli.limit_kb)?;

        let builtin_skip = default_skip_dirs();
        let default_excludes = default_excludes(&builtin_skip);
        let (extra_skip, extra_excludes) =
            resolve_extra_excludes(&directory, &clean_patterns(&self.cli.extra_exclude));

        let mut skip_dirs = builtin_skip;
        for dir in extra_skip {
            if !skip_dirs.contains(&dir) {
                skip_dirs.push(dir);
            }
        }

        Ok(AppConfig {
            directory,
            budget_bytes,
            skip_dirs,
            default_excludes,
            extra_excludes,
            include: clean_patterns(&self.cli.include),
            auto_exclude: self.cli.auto_exclude,
            output: self.cli.output.clone(),
            converter: self.cli.converter.clone(),
            top: self.cli.top,
            assume_yes: self.cli.yes,
            dry_run: self.cli.dry_run,
            no_progress: self.cli.no_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_directories_are_upgraded_to_subtree_patterns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::create_dir_all(dir.path().join("assets/img")).unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let extra = vec![
            "docs".to_string(),
            "assets/img/**".to_string(),
            "notes.txt".to_string(),
            "*.bak".to_string(),
            "missing".to_string(),
        ];
        let (skip, patterns) = resolve_extra_excludes(dir.path(), &extra);
        assert_eq!(skip, vec!["docs", "assets/img"]);
        assert_eq!(
            patterns,
            vec!["docs/**", "assets/img/**", "notes.txt", "*.bak", "missing"]
        );
    }

    #[test]
    fn adapter_builds_config_from_cli() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("fixtures")).unwrap();
        let root = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "doc-budget",
            "--directory",
            root.as_str(),
            "--limit-kb",
            "100",
            "--extra-exclude",
            "fixtures",
        ]);
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        assert_eq!(config.budget_bytes, 100 * 1024);
        assert!(config.skip_dirs.contains(&"fixtures".to_string()));
        assert!(config.skip_dirs.contains(&"node_modules".to_string()));
        assert_eq!(config.extra_excludes, vec!["fixtures/**"]);
        assert!(config.default_excludes.contains(&"node_modules/**".to_string()));
    }

    #[test]
    fn adapter_rejects_missing_directory() {
        let cli = Cli::parse_from(["doc-budget", "--directory", "/definitely/not/here"]);
        assert!(CliConfigAdapter::new(cli).get_config().is_err());
    }
}
