// 縮排正規化的配置
// 取代原設計的行程全域可變狀態：由呼叫端明確傳入，避免跨執行緒互相干擾

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitConfig {
    /// 每個 TAB 字元展開成的空格數
    pub tab_width: usize,
    /// 重新連接各行時使用的分隔字串
    pub line_separator: String,
}

impl FitConfig {
    pub fn new() -> Self {
        Self {
            tab_width: 2,
            line_separator: "\n".to_string(),
        }
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
