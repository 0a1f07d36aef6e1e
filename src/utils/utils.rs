use std::io;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

// 掃描期間的進度指示器
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, count: u64, total_size: u64) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 };
        self.pb.set_message(format!(
            "掃描中：{} 個項目，{}，速度：{:.0} 項目/秒",
            count,
            format_file_size(total_size),
            speed
        ));
    }

    pub fn finish(&self, entry_count: u64, total_size: u64, skipped_dirs: u64) {
        if !self.no_progress {
            self.pb.finish_and_clear();
        }
        log::info!(
            "掃描完成，共 {} 個項目，檔案總大小：{}，跳過 {} 個目錄",
            entry_count,
            format_file_size(total_size),
            skipped_dirs
        );
    }
}

pub fn create_progress_bar(no_progress: bool) -> ProgressManager {
    ProgressManager::new(no_progress)
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}
