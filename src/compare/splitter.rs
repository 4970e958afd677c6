//! 释义切分
//!
//! 把一条释义按逗号/分号切成义项短语，全角标点先归一为半角。
//! 义项顺序保持原文顺序：靠前的义项视为更常用（常用度计算依赖此顺序）。

/// 释义切分为义项列表
///
/// - 全角逗号/分号（，；）归一为半角后按 `,` `;` 切分
/// - 每段去首尾空白，空段丢弃
/// - 切不出任何义项时整体（去空白）作为唯一义项返回，
///   输入本身为空白时得到单个空字符串义项
pub fn split_terms(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '，' => ',',
            '；' => ';',
            _ => c,
        })
        .collect();

    let terms: Vec<String> = normalized
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        vec![text.trim().to_string()]
    } else {
        terms
    }
}
