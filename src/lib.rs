//! shiyi-check 词汇释义比对工具
//!
//! 上传词库（单词 + 释义），抓取有道词典网页版中文释义，
//! 逐词比对两条释义的一致程度，按等级分表导出Excel报告。

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod lookup;

pub use compare::{compare, compare_all, CheckedRecord, ComparisonResult, DefinitionRecord, Tier};
pub use config::Config;
pub use error::{Result, ShiyiError};
pub use ingest::WordEntry;
