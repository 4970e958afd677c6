use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiyiError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    #[error("词库表缺少必需列: {0}")]
    MissingColumns(String),

    #[error("词库为空: {0}")]
    NoWordsFound(String),

    #[error("Excel读取错误: {0}")]
    SpreadsheetRead(String),

    #[error("Excel生成错误: {0}")]
    ExcelGeneration(String),

    #[error("有道释义获取失败: {0}")]
    Lookup(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShiyiError>;
