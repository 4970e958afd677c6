use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// 一条待比对记录：单词 + 用户释义 + 有道释义
///
/// 构造后不再修改，比对结果是它的纯函数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRecord {
    pub word: String,

    #[serde(default)]
    pub user_definition: String,

    #[serde(default)]
    pub reference_definition: String,
}

/// 单条记录的比对结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub word: String,

    /// 相似度 [0, 1]，被包含时恒为 1.0
    pub similarity: f64,

    /// 用户释义是否被有道释义完全包含
    pub is_contained: bool,

    /// 常用度 [0, 1]
    pub commonness: f64,

    pub tier: Tier,

    /// tier == 需核查 时为 true
    pub needs_manual_review: bool,
}

/// 比对结果JSON/报告中的一行：记录原文 + 比对结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedRecord {
    pub word: String,

    #[serde(default)]
    pub user_definition: String,

    #[serde(default)]
    pub youdao_definition: String,

    pub similarity: f64,

    pub is_contained: bool,

    pub commonness: f64,

    pub tier: Tier,

    pub needs_manual_review: bool,
}

impl CheckedRecord {
    pub fn new(record: DefinitionRecord, result: ComparisonResult) -> Self {
        Self {
            word: record.word,
            user_definition: record.user_definition,
            youdao_definition: record.reference_definition,
            similarity: result.similarity,
            is_contained: result.is_contained,
            commonness: result.commonness,
            tier: result.tier,
            needs_manual_review: result.needs_manual_review,
        }
    }
}
