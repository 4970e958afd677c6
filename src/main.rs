use clap::Parser;
use shiyi_check::{cli, compare, config, error, export, ingest, lookup};

use cli::{Cli, Commands};
use compare::{CheckedRecord, DefinitionRecord, Tier};
use config::Config;
use error::{Result, ShiyiError};
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check { input, output, sheet, offline } => {
            println!("📖 shiyi-check - 释义比对\n");

            let checked =
                check_wordlist(&input, sheet.as_deref(), offline, &config, cli.verbose).await?;
            print_summary(&checked);

            let output = output.unwrap_or_else(|| input.with_extension("json"));
            let json = serde_json::to_string_pretty(&checked)?;
            std::fs::write(&output, json)?;
            println!("✔ 结果已保存: {}", output.display());
        }

        Commands::Export { input, output } => {
            println!("📄 shiyi-check - 报告导出\n");

            let content = std::fs::read_to_string(&input)?;
            let checked: Vec<CheckedRecord> = serde_json::from_str(&content)?;
            print_summary(&checked);

            let output = output.unwrap_or_else(default_report_path);
            export::generate_report(&checked, &output)?;
            println!("✔ 报告已生成: {}", output.display());
        }

        Commands::Run { input, output, sheet, offline, keep_json } => {
            println!("🚀 shiyi-check - 一键比对\n");

            let checked =
                check_wordlist(&input, sheet.as_deref(), offline, &config, cli.verbose).await?;
            print_summary(&checked);

            if keep_json {
                let json_path = input.with_extension("json");
                let json = serde_json::to_string_pretty(&checked)?;
                std::fs::write(&json_path, json)?;
                println!("✔ 中间结果: {}", json_path.display());
            }

            let output = output.unwrap_or_else(default_report_path);
            export::generate_report(&checked, &output)?;
            println!("\n✅ 完成: {}", output.display());
        }

        Commands::Config { show, set_timeout, set_interval, set_max_senses } => {
            let mut config = config;
            let mut changed = false;

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = seconds;
                changed = true;
            }
            if let Some(ms) = set_interval {
                config.request_interval_ms = ms;
                changed = true;
            }
            if let Some(n) = set_max_senses {
                config.max_senses = n;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 配置已保存");
            }

            if show || !changed {
                println!("配置 ({}):", Config::config_path()?.display());
                println!("  请求超时: {}秒", config.timeout_seconds);
                println!("  请求间隔: {}毫秒", config.request_interval_ms);
                println!("  失败重试: {}次", config.retry_count);
                println!("  取用义项数: {}", config.max_senses);
            }
        }
    }

    Ok(())
}

/// 读取词库 → 准备有道释义 → 批量比对
async fn check_wordlist(
    input: &Path,
    sheet: Option<&str>,
    offline: bool,
    config: &Config,
    verbose: bool,
) -> Result<Vec<CheckedRecord>> {
    println!("[1/3] 读取词库...");
    let mut entries = ingest::read_wordlist(input, sheet)?;
    println!("✔ 共{}个词条\n", entries.len());

    if entries.is_empty() {
        return Err(ShiyiError::NoWordsFound(input.display().to_string()));
    }

    if offline {
        println!("[2/3] 离线模式，使用表格内有道释义");
        if entries.iter().any(|e| e.reference_definition.is_none()) {
            return Err(ShiyiError::MissingColumns(
                "有道释义（--offline 模式需要该列）".into(),
            ));
        }
    } else {
        println!("[2/3] 抓取有道释义...");
        lookup::lookup_all(&mut entries, config, verbose).await?;
    }

    let missing = entries
        .iter()
        .filter(|e| e.reference_definition.as_deref().unwrap_or("").is_empty())
        .count();
    if missing > 0 {
        println!("⚠ {}个词条未获取到释义（将标记为需核查）", missing);
    }
    println!("✔ 释义就绪\n");

    println!("[3/3] 比对中...");
    let records: Vec<DefinitionRecord> = entries
        .into_iter()
        .map(|e| DefinitionRecord {
            word: e.word,
            user_definition: e.user_definition,
            reference_definition: e.reference_definition.unwrap_or_default(),
        })
        .collect();

    let results = compare::compare_all(&records);
    let checked: Vec<CheckedRecord> = records
        .into_iter()
        .zip(results)
        .map(|(record, result)| CheckedRecord::new(record, result))
        .collect();
    println!("✔ 比对完成\n");

    Ok(checked)
}

fn print_summary(checked: &[CheckedRecord]) {
    let count = |tier: Tier| checked.iter().filter(|r| r.tier == tier).count();
    println!(
        "统计: 高一致 {} / 可接受 {} / 需核查 {}（共{}条）\n",
        count(Tier::HighConsistency),
        count(Tier::Acceptable),
        count(Tier::NeedsReview),
        checked.len()
    );
}

fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "释义比对报告_{}.xlsx",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ))
}
