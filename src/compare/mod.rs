//! 释义比对核心
//!
//! 对每条 `(单词, 用户释义, 有道释义)` 记录独立打分：
//! 1. 双方释义切分为义项
//! 2. 判定用户释义是否被完全包含，包含即满分
//! 3. 不包含时退回TF-IDF余弦相似度
//! 4. 相似度分档，"需核查"档置人工复查标记
//! 5. 无论是否包含，都按义项排序算一份常用度
//!
//! 全程无共享状态、无错误路径：退化输入（空释义、切不出词元）
//! 一律落到 0.0 分和"需核查"档，不中断批处理。

pub mod commonness;
pub mod containment;
pub mod splitter;
pub mod tfidf;
pub mod tier;
mod types;

pub use tier::Tier;
pub use types::{CheckedRecord, ComparisonResult, DefinitionRecord};

use rayon::prelude::*;

/// 比对一条记录
pub fn compare(record: &DefinitionRecord) -> ComparisonResult {
    let user_terms = splitter::split_terms(&record.user_definition);
    let reference_terms = splitter::split_terms(&record.reference_definition);

    let is_contained = containment::is_fully_contained(&user_terms, &reference_terms);
    let similarity = if is_contained {
        1.0
    } else {
        tfidf::similarity(&record.user_definition, &record.reference_definition)
    };

    let tier = Tier::classify(similarity);
    let commonness = commonness::score(&user_terms, &reference_terms);

    ComparisonResult {
        word: record.word.clone(),
        similarity,
        is_contained,
        commonness,
        tier,
        needs_manual_review: tier == Tier::NeedsReview,
    }
}

/// 批量比对，结果顺序与输入一致
///
/// 记录之间互不依赖，按核数并行。
pub fn compare_all(records: &[DefinitionRecord]) -> Vec<ComparisonResult> {
    records.par_iter().map(compare).collect()
}
