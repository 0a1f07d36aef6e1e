// 互動選單的單一選項
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    pub label: String,
    pub value: String,
    pub pre_checked: bool,
}

// 選擇結果與自動排除被使用者取消的項目
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub final_excludes: Vec<String>,
    pub overridden: Vec<String>,
}
