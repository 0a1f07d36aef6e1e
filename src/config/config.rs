use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "doc-budget",
    version,
    about = "在產生文件包之前，排除過大的檔案與目錄以控制輸出大小",
    long_about = "掃描目錄並預估外部 codebase-to-prompt 轉換工具的輸出大小，可自動排除最大的檔案以符合大小上限，並透過互動選單確認最終排除清單後執行轉換。\n使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    /// 要掃描的目錄
    #[arg(short, long, default_value = ".")]
    pub directory: String,
    /// 輸出大小上限（KB）
    #[arg(short, long, default_value_t = 400)]
    pub limit_kb: u64,
    /// 額外排除的目錄或模式，以逗號分隔
    #[arg(long, value_delimiter = ',')]
    pub extra_exclude: Option<Vec<String>>,
    /// 傳給轉換工具的包含模式，以逗號分隔
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,
    /// 超過上限時自動預選最大的檔案排除
    #[arg(long, default_value_t = false)]
    pub auto_exclude: bool,
    /// 轉換工具的輸出檔案
    #[arg(short, long)]
    pub output: Option<String>,
    /// 轉換工具指令
    #[arg(long, default_value = "codebase-to-prompt")]
    pub converter: String,
    /// 互動選單中列出的最大項目數
    #[arg(long, default_value_t = 50)]
    pub top: usize,
    /// 直接接受預選結果，不顯示互動選單
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
    /// 只印出轉換指令，不執行
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input),
        ));
    }
    if !path.is_dir() {
        log::error!("輸入路徑不是目錄：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("輸入路徑 '{}' 不是目錄", input),
        ));
    }
    Ok(path)
}

pub fn validate_limit(limit_kb: u64) -> io::Result<u64> {
    if limit_kb == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "大小上限必須大於 0 KB",
        ));
    }
    Ok(limit_kb.saturating_mul(1024))
}

// 清理逗號清單：去除空白與空項目
pub fn clean_patterns(patterns: &Option<Vec<String>>) -> Vec<String> {
    patterns
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
