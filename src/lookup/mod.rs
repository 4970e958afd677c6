//! 有道释义批量获取
//!
//! 逐词顺序抓取并留请求间隔，单词失败不拖垮整批：
//! 重试用尽后该词的有道释义记为空串，比对阶段自然落入"需核查"。

mod youdao;

pub use youdao::{fetch_definition, parse_definition};

use crate::config::Config;
use crate::error::{Result, ShiyiError};
use crate::ingest::WordEntry;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 为缺少有道释义的词条补全释义（就地填写）
pub async fn lookup_all(entries: &mut [WordEntry], config: &Config, verbose: bool) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| ShiyiError::Lookup(e.to_string()))?;

    let pending = entries
        .iter()
        .filter(|e| e.reference_definition.is_none())
        .count();
    let bar = ProgressBar::new(pending as u64);
    bar.set_style(
        ProgressStyle::with_template("  [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let interval = Duration::from_millis(config.request_interval_ms);
    let mut first = true;

    for entry in entries.iter_mut() {
        if entry.reference_definition.is_some() {
            continue;
        }

        if !first {
            tokio::time::sleep(interval).await;
        }
        first = false;

        bar.set_message(entry.word.clone());
        let definition = fetch_with_retry(&client, &entry.word, config, verbose).await;
        entry.reference_definition = Some(definition);
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(())
}

/// 单词抓取，失败重试，最终失败降级为空释义
async fn fetch_with_retry(
    client: &reqwest::Client,
    word: &str,
    config: &Config,
    verbose: bool,
) -> String {
    let mut last_error = None;

    for attempt in 0..=config.retry_count {
        match fetch_definition(client, word, config.max_senses).await {
            Ok(definition) => {
                if verbose && attempt > 0 {
                    eprintln!("  重试成功: {}（第{}次）", word, attempt + 1);
                }
                return definition;
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < config.retry_count {
                    tokio::time::sleep(Duration::from_millis(config.request_interval_ms * 2)).await;
                }
            }
        }
    }

    if let Some(e) = last_error {
        eprintln!("⚠ {}", e);
    }
    String::new()
}
