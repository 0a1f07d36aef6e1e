use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Component, Path};

use log::{debug, warn};
use pathdiff::diff_paths;
use walkdir::WalkDir;

use crate::models::entry::Entry;
use crate::utils::utils::create_progress_bar;

/// 將相對路徑轉為以 `/` 分隔的 POSIX 形式
pub fn to_posix_relative(path: &Path, root: &Path) -> Option<String> {
    let relative = diff_paths(path, root)?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(match name.to_str() {
                Some(name) => name.to_string(),
                None => {
                    warn!("路徑名稱不是有效的 UTF-8，以近似名稱表示：{}", path.display());
                    name.to_string_lossy().into_owned()
                }
            }),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// 目錄是否應被跳過：相對路徑與設定的跳過路徑完全相等
pub fn is_skipped_dir(relative: &str, skip_dirs: &HashSet<String>) -> bool {
    skip_dirs.contains(relative)
}

pub fn normalize_skip_dirs<S: AsRef<str>>(skip_dirs: &[S]) -> HashSet<String> {
    skip_dirs
        .iter()
        .map(|s| s.as_ref().trim_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// 遞迴掃描根目錄，回傳依大小遞減排序的項目清單。
///
/// 跳過的目錄記錄為大小 0 且不深入。目錄大小在同一次走訪中
/// 由其下每個檔案累加至所有祖先目錄而得。無法讀取的項目僅記錄警告。
pub fn scan<S: AsRef<str>>(root: &Path, skip_dirs: &[S], no_progress: bool) -> io::Result<Vec<Entry>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("掃描根目錄 '{}' 不存在或不是目錄", root.display()),
        ));
    }
    // 根目錄本身無法讀取時直接回報
    fs::read_dir(root)?;

    let skip_dirs = normalize_skip_dirs(skip_dirs);
    let pm = create_progress_bar(no_progress);

    let mut entries: Vec<Entry> = Vec::new();
    let mut dir_index: HashMap<String, usize> = HashMap::new();
    // 已記錄但內容無法讀取的目錄，最後從結果移除
    let mut unreadable: HashSet<usize> = HashSet::new();
    let mut skipped = 0u64;
    let mut total_file_size = 0u64;

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false).into_iter();
    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(e) => {
                let target = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!("無法讀取 {}：{}，跳過", target, e);
                // walkdir 先回傳目錄本身，開啟失敗時才在下一次回報錯誤
                let opened = e
                    .path()
                    .and_then(|p| to_posix_relative(p, root))
                    .and_then(|relative| dir_index.get(&relative).copied());
                if let Some(index) = opened {
                    if index + 1 == entries.len() {
                        unreadable.insert(index);
                    }
                }
                continue;
            }
        };

        let Some(relative) = to_posix_relative(entry.path(), root) else {
            continue;
        };
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if is_skipped_dir(&relative, &skip_dirs) {
                debug!("跳過目錄：{}", relative);
                entries.push(Entry::directory(relative, 0));
                skipped += 1;
                walker.skip_current_dir();
                continue;
            }
            dir_index.insert(relative.clone(), entries.len());
            entries.push(Entry::directory(relative, 0));
        } else if file_type.is_file() {
            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    warn!("無法取得檔案資訊 {}：{}，跳過", relative, e);
                    continue;
                }
            };
            for ancestor in ancestors(&relative) {
                if let Some(&index) = dir_index.get(ancestor) {
                    entries[index].size += size;
                }
            }
            total_file_size += size;
            entries.push(Entry::file(relative, size));
        } else {
            debug!("略過非一般檔案：{}", relative);
        }

        if entries.len() % 256 == 0 {
            pm.update(entries.len() as u64, total_file_size);
        }
    }

    if !unreadable.is_empty() {
        entries = entries
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !unreadable.contains(index))
            .map(|(_, entry)| entry)
            .collect();
    }

    pm.finish(entries.len() as u64, total_file_size, skipped);
    entries.sort_by(|a, b| b.size.cmp(&a.size));
    Ok(entries)
}

// `a/b/c.txt` 的祖先目錄：`a`、`a/b`
fn ancestors(relative: &str) -> impl Iterator<Item = &str> {
    relative
        .match_indices('/')
        .map(move |(index, _)| &relative[..index])
}
