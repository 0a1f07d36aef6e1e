// 掃描得到的單一檔案系統物件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 相對於掃描根目錄的 POSIX 路徑，不含開頭的 `/`
    pub path: String,
    pub is_directory: bool,
    /// 檔案為實際位元組數；目錄為所有子孫檔案大小總和，被跳過的目錄固定為 0
    pub size: u64,
}

impl Entry {
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Entry { path: path.into(), is_directory: false, size }
    }

    pub fn directory(path: impl Into<String>, size: u64) -> Self {
        Entry { path: path.into(), is_directory: true, size }
    }

    /// 互動選單使用的值：目錄帶 `/**` 後綴，檔案為原始路徑
    pub fn selection_value(&self) -> String {
        if self.is_directory {
            format!("{}/**", self.path)
        } else {
            self.path.clone()
        }
    }
}
