// 內建的跳過目錄：掃描時不深入，並以 `dir/**` 形式加入預設排除
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "dist",
    "build",
    "out",
    "coverage",
    ".next",
    ".nuxt",
    ".cache",
    ".parcel-cache",
    ".turbo",
    "target",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    ".idea",
    ".vscode",
];

// 內建的檔案排除模式
pub const DEFAULT_FILE_PATTERNS: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "poetry.lock",
    "**/*.min.js",
    "**/*.min.css",
    "**/*.map",
    "**/*.log",
    "**/.DS_Store",
    "**/*.png",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.gif",
    "**/*.ico",
    "**/*.pdf",
    "**/*.zip",
    "**/*.woff",
    "**/*.woff2",
];

pub fn default_skip_dirs() -> Vec<String> {
    DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect()
}

/// 預設排除：每個跳過目錄轉為 `dir/**`，再加上內建檔案模式
pub fn default_excludes(skip_dirs: &[String]) -> Vec<String> {
    skip_dirs
        .iter()
        .map(|dir| format!("{}/**", dir.trim_end_matches('/')))
        .chain(DEFAULT_FILE_PATTERNS.iter().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_dirs_become_subtree_patterns() {
        let excludes = default_excludes(&["node_modules".to_string(), "vendor/bundle/".to_string()]);
        assert_eq!(excludes[0], "node_modules/**");
        assert_eq!(excludes[1], "vendor/bundle/**");
        assert!(excludes.contains(&"package-lock.json".to_string()));
    }
}
