use std::collections::HashMap;

use log::{debug, warn};
use regex::Regex;

// 編譯後的單一排除/包含模式
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// `dir/**`：目錄本身及其下所有路徑
    Subtree(String),
    /// 不含 `*`：完全相等
    Literal(String),
    /// 一般萬用字元模式
    Glob(Regex),
    /// 無法編譯的模式，永遠不匹配
    Never,
}

impl CompiledPattern {
    pub fn new(pattern: &str) -> Self {
        if let Some(dir_name) = pattern.strip_suffix("/**") {
            return CompiledPattern::Subtree(dir_name.to_string());
        }
        if !pattern.contains('*') {
            return CompiledPattern::Literal(pattern.to_string());
        }
        match Regex::new(&glob_to_regex(pattern)) {
            Ok(regex) => CompiledPattern::Glob(regex),
            Err(e) => {
                warn!("無效的模式 {}：{}，視為不匹配", pattern, e);
                CompiledPattern::Never
            }
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        match self {
            CompiledPattern::Subtree(dir_name) => {
                path == dir_name
                    || path
                        .strip_prefix(dir_name.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            CompiledPattern::Literal(literal) => path == literal,
            CompiledPattern::Glob(regex) => regex.is_match(path),
            CompiledPattern::Never => false,
        }
    }
}

/// 將萬用字元模式轉為完整錨定的正規表達式。
///
/// `**/` 可匹配零或多層目錄，其餘 `**` 匹配任意字元（含 `/`），
/// 單一 `*` 匹配不含 `/` 的任意字元，其他字元一律跳脫。
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2 + 2);
    regex.push('^');
    let mut literal = String::new();
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        if c != '*' {
            literal.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }
        regex.push_str(&regex::escape(&literal));
        literal.clear();
        if let Some(after) = rest.strip_prefix("**/") {
            regex.push_str("(?:.*/)?");
            rest = after;
        } else if let Some(after) = rest.strip_prefix("**") {
            regex.push_str(".*");
            rest = after;
        } else {
            regex.push_str("[^/]*");
            rest = &rest[1..];
        }
    }
    regex.push_str(&regex::escape(&literal));
    regex.push('$');
    regex
}

/// 判斷相對路徑是否符合模式（每次呼叫重新編譯）
pub fn matches(path: &str, pattern: &str) -> bool {
    CompiledPattern::new(pattern).is_match(path)
}

// 一組模式，每個不同的模式字串只編譯一次
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<String>,
    compiled: HashMap<String, CompiledPattern>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut set = PatternSet::default();
        for pattern in patterns {
            set.add(pattern.as_ref());
        }
        set
    }

    pub fn add(&mut self, pattern: &str) {
        if self.compiled.contains_key(pattern) {
            return;
        }
        debug!("編譯排除模式：{}", pattern);
        self.compiled
            .insert(pattern.to_string(), CompiledPattern::new(pattern));
        self.patterns.push(pattern.to_string());
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .filter_map(|p| self.compiled.get(p))
            .any(|compiled| compiled.is_match(path))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
