use crate::error::{Result, ShiyiError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 抓取相关的持久化配置
///
/// 分档阈值（0.6/0.8）不开放配置：阈值是按两文档退化TF-IDF标定的，
/// 改了阈值等于换了一套口径。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 单次请求超时（秒）
    pub timeout_seconds: u64,
    /// 相邻请求间隔（毫秒）
    pub request_interval_ms: u64,
    /// 失败重试次数
    pub retry_count: u32,
    /// 取前几个义项
    pub max_senses: usize,
    /// 请求UA
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            request_interval_ms: 250,
            retry_count: 2,
            max_senses: 3,
            user_agent: "Mozilla/5.0".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShiyiError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("shiyi-check").join("config.json"))
    }
}
