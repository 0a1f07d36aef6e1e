use std::io;
use crate::models::budget::{BudgetInput, BudgetOutput};

// Facade 接口，負責協調掃描、預估、自動排除與選擇合併流程
pub trait BudgetFacadeTrait {
    /// 執行完整的大小控制流程
    /// # 參數
    /// - input: 掃描根目錄、大小上限與排除設定
    /// # 回傳
    /// - 成功時返回最終排除清單與預估大小，根目錄無法讀取時返回 IO 錯誤
    fn execute_budget(&self, input: BudgetInput) -> io::Result<BudgetOutput>;
}
