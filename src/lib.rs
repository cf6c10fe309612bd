//! textfit - 多行文字區塊的縮排正規化工具
//!
//! 讓原始碼裡的長多行字串字面值可以照正常方式縮排（配合格式化工具），
//! 執行時取得未縮排的值。

// 內部模組
mod config;
mod fit;

// 重新導出常用類型與函式
pub use config::FitConfig;
pub use fit::{fit, fit_with};
