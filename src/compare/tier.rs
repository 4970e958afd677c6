//! 相似度分档

use serde::{Deserialize, Serialize};

/// 相似度等级
///
/// 序列化为报告中的三个固定标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// 相似度 >= 0.8
    #[serde(rename = "高一致")]
    HighConsistency,
    /// 0.6 <= 相似度 < 0.8
    #[serde(rename = "可接受")]
    Acceptable,
    /// 相似度 < 0.6
    #[serde(rename = "需核查")]
    NeedsReview,
}

impl Tier {
    /// 按阈值分档，各档下界含等号（0.8、0.6处取高档）
    pub fn classify(score: f64) -> Self {
        if score >= 0.8 {
            Tier::HighConsistency
        } else if score >= 0.6 {
            Tier::Acceptable
        } else {
            Tier::NeedsReview
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::HighConsistency => "高一致",
            Tier::Acceptable => "可接受",
            Tier::NeedsReview => "需核查",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
