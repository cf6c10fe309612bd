// 縮排正規化
// 以第一個非空白行的縮排作為整個區塊的 margin，逐行去除

use once_cell::sync::Lazy;

use crate::config::FitConfig;

// fit() 每次呼叫共用的預設配置
static DEFAULT_CONFIG: Lazy<FitConfig> = Lazy::new(FitConfig::new);

/// 以預設配置（tab 寬度 2、分隔符 `"\n"`）正規化 `text` 的縮排
pub fn fit(text: &str) -> String {
    fit_with(text, &DEFAULT_CONFIG)
}

/// 逐行轉換 `text`：
///
/// * 每個 TAB 字元替換為 `config.tab_width` 個空格
/// * 第一個非空白行之前的空白行整行丟棄
/// * 記錄第一個非空白行的前導空白字元數（margin），
///   之後每一行最多去除 margin 個前導空白字元；
///   縮排比 margin 淺的行只去除自己的縮排，不會出錯
/// * 去除每一行的尾端空白
/// * 以 `config.line_separator` 連接各行，整體修剪前後空白之後，
///   結尾補上恰好一個分隔符
///
/// 輸入以 `\n` 分行，行尾的 `\r` 一併去除，因此 CRLF 輸入與 LF 輸入
/// 產生相同的輸出。對任何輸入都不會失敗：空字串輸入產生單一分隔符。
pub fn fit_with(text: &str, config: &FitConfig) -> String {
    let tab = " ".repeat(config.tab_width);
    let mut margin = 0;
    let mut lines: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.replace('\t', &tab);

        // 第一個非空白行之前的空白行整行跳過
        if lines.is_empty() && is_blank(&line) {
            continue;
        }

        let ns = first_non_space(&line);

        // 第一個保留的行決定 margin
        if lines.is_empty() {
            margin = ns.unwrap_or(0);
        }

        let strip = match ns {
            Some(n) => n.min(margin),
            // 空白行在下面 trim_end 時整行清空
            None => 0,
        };

        // 以字元為單位去除前導空白，多位元組字元也不會切壞
        let offset = line
            .char_indices()
            .nth(strip)
            .map_or(line.len(), |(i, _)| i);

        lines.push(line[offset..].trim_end().to_string());
    }

    log::trace!("fit: margin={}, retained {} line(s)", margin, lines.len());

    let joined = lines.join(&config.line_separator);
    let mut result = joined.trim().to_string();
    result.push_str(&config.line_separator);
    result
}

// 整行是否皆為空白
fn is_blank(s: &str) -> bool {
    first_non_space(s).is_none()
}

// 第一個非空白字元的字元索引；整行空白時為 None
fn first_non_space(s: &str) -> Option<usize> {
    s.chars().position(|c| !c.is_whitespace())
}
