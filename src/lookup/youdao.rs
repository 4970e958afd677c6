//! 有道词典网页释义抓取
//!
//! 抓取 `https://dict.youdao.com/w/{word}` 页面，
//! 中文基础释义在 `div#phrsListTab` 的 li 列表里。

use crate::error::{Result, ShiyiError};
use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref CONTAINER: Selector = Selector::parse("div#phrsListTab").unwrap();
    static ref SENSE_ITEM: Selector = Selector::parse("li").unwrap();
}

/// 抓取一个单词的网页释义
///
/// 取前 `max_senses` 个义项，用 "; " 连接。页面上找不到释义区域时
/// 返回空串（查无此词不算错误）。
pub async fn fetch_definition(
    client: &reqwest::Client,
    word: &str,
    max_senses: usize,
) -> Result<String> {
    let url = format!("https://dict.youdao.com/w/{}", urlencoding::encode(word));

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ShiyiError::Lookup(format!("{}: {}", word, e)))?;

    if !response.status().is_success() {
        return Err(ShiyiError::Lookup(format!(
            "{}: HTTP {}",
            word,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ShiyiError::Lookup(format!("{}: {}", word, e)))?;

    Ok(parse_definition(&body, max_senses))
}

/// 从页面HTML提取释义文本
///
/// li 内的文本节点去空白后直接拼接（中文释义不需要空格分隔），
/// 空义项丢弃。
pub fn parse_definition(html: &str, max_senses: usize) -> String {
    let document = Html::parse_document(html);

    let Some(container) = document.select(&CONTAINER).next() else {
        return String::new();
    };

    let senses: Vec<String> = container
        .select(&SENSE_ITEM)
        .map(|li| {
            li.text()
                .flat_map(str::split_whitespace)
                .collect::<String>()
        })
        .filter(|s| !s.is_empty())
        .take(max_senses)
        .collect();

    senses.join("; ")
}
