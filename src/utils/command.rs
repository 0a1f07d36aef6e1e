use std::io;
use std::process::Command;

use log::info;

use crate::config::ports::CommandPort;

// 外部轉換工具的呼叫
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ConverterCommand {
    /// 以 shell 相容的引號格式顯示完整指令
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|arg| shell_quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn build_command(
    converter: &str,
    directory: &str,
    final_excludes: &[String],
    include: &[String],
    output: Option<&str>,
) -> ConverterCommand {
    let mut args = vec![directory.to_string()];
    if !final_excludes.is_empty() {
        args.push("--exclude".to_string());
        args.push(final_excludes.join(","));
    }
    if !include.is_empty() {
        args.push("--include".to_string());
        args.push(include.join(","));
    }
    if let Some(output) = output {
        args.push("--output".to_string());
        args.push(output.to_string());
    }
    ConverterCommand {
        program: converter.to_string(),
        args,
    }
}

pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_./,=:-".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

// 直接以 argv 執行轉換工具，不經過 shell
pub struct ProcessCommandAdapter;

impl CommandPort for ProcessCommandAdapter {
    fn run(&self, command: &ConverterCommand) -> io::Result<()> {
        info!("執行轉換指令：{}", command.display());
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("無法啟動轉換工具 '{}': {}", command.program, e),
                )
            })?;
        if !status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("轉換工具結束狀態異常：{}", status),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_exclude_and_include_lists() {
        let command = build_command(
            "codebase-to-prompt",
            ".",
            &["node_modules/**".to_string(), "a.txt".to_string()],
            &["src/**".to_string()],
            Some("out.md"),
        );
        assert_eq!(
            command.args,
            vec![".", "--exclude", "node_modules/**,a.txt", "--include", "src/**", "--output", "out.md"]
        );
    }

    #[test]
    fn omits_empty_lists() {
        let command = build_command("conv", "src", &[], &[], None);
        assert_eq!(command.args, vec!["src"]);
    }

    #[test]
    fn display_quotes_glob_characters() {
        let command = build_command("conv", ".", &["**/*.min.js".to_string()], &[], None);
        assert_eq!(command.display(), "conv . --exclude '**/*.min.js'");
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
        assert_eq!(shell_quote(""), "''");
    }
}
