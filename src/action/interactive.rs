use dialoguer::{Confirm, MultiSelect};
use std::io;

use crate::config::ports::SelectionPort;
use crate::models::selection::SelectionItem;

// 以 dialoguer 多選清單讓使用者確認要排除的項目
pub struct DialoguerSelection;

impl SelectionPort for DialoguerSelection {
    fn select(&self, items: &[SelectionItem]) -> io::Result<Vec<String>> {
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
        let defaults: Vec<bool> = items.iter().map(|item| item.pre_checked).collect();

        let chosen = MultiSelect::new()
            .with_prompt("勾選要排除的項目（空白鍵切換，Enter 確認）")
            .items(&labels)
            .defaults(&defaults)
            .max_length(20)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("排除項目選擇失敗: {}", e)))?;

        Ok(chosen
            .into_iter()
            .filter_map(|index| items.get(index))
            .map(|item| item.value.clone())
            .collect())
    }
}

pub fn confirm_execution(command_line: &str) -> io::Result<bool> {
    Confirm::new()
        .with_prompt(format!("是否執行轉換指令？\n  {}", command_line))
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("執行確認輸入失敗: {}", e)))
}
