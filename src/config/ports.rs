use std::io;
use std::path::PathBuf;

use crate::models::selection::SelectionItem;
use crate::utils::command::ConverterCommand;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub budget_bytes: u64,
    /// 掃描時不深入的目錄（相對路徑）
    pub skip_dirs: Vec<String>,
    pub default_excludes: Vec<String>,
    pub extra_excludes: Vec<String>,
    pub include: Vec<String>,
    pub auto_exclude: bool,
    pub output: Option<String>,
    pub converter: String,
    pub top: usize,
    pub assume_yes: bool,
    pub dry_run: bool,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 互動選擇的 Port：傳入選項，回傳使用者最終勾選的值
pub trait SelectionPort {
    fn select(&self, items: &[SelectionItem]) -> io::Result<Vec<String>>;
}

// 轉換指令執行的 Port
pub trait CommandPort {
    fn run(&self, command: &ConverterCommand) -> io::Result<()>;
}
