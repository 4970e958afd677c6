//! 词频相似度（TF-IDF + 余弦）
//!
//! 语料只有被比较的两条释义本身，IDF是退化的：只区分"单侧出现"与
//! "双侧出现"的词。0.6/0.8 的分档阈值就是按这种退化行为标定的，
//! 不要改成全语料IDF。
//!
//! 分词与权重沿用 sklearn `TfidfVectorizer` 的默认口径：
//! 连续的词字符（≥2个）为一个词元、转小写、原始词频、
//! 平滑IDF `ln((1+n)/(1+df)) + 1`、向量做L2归一。

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // sklearn 默认 token_pattern r"(?u)\b\w\w+\b" 的等价形式：
    // 单字符词元被丢弃，中文整段连写算一个词元
    static ref TOKEN_RE: Regex = Regex::new(r"\w\w+").unwrap();
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn term_counts(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// 两条释义的TF-IDF余弦相似度，取值 [0, 1]
///
/// 任一侧分不出词元时返回 0.0（空串、纯标点等退化输入），
/// 相似度计算永不报错、永不中断批处理。
pub fn similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    // 两文档语料的平滑IDF：df=1 → ln(3/2)+1，df=2 → 1
    let n_docs = 2.0_f64;
    let idf = |term: &str| {
        let df = counts_a.contains_key(term) as u32 + counts_b.contains_key(term) as u32;
        ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0
    };

    let weigh = |counts: &HashMap<&str, f64>| -> HashMap<String, f64> {
        counts
            .iter()
            .map(|(term, count)| (term.to_string(), count * idf(term)))
            .collect()
    };
    let vec_a = weigh(&counts_a);
    let vec_b = weigh(&counts_b);

    let norm = |v: &HashMap<String, f64>| v.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_a = norm(&vec_a);
    let norm_b = norm(&vec_b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = vec_a
        .iter()
        .filter_map(|(term, wa)| vec_b.get(term).map(|wb| wa * wb))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_cjk_and_latin() {
        assert_eq!(tokenize("快速的; 迅速地"), vec!["快速的", "迅速地"]);
        // 单字符词元被丢弃（sklearn默认口径）
        assert_eq!(tokenize("a bc 快"), vec!["bc"]);
        assert_eq!(tokenize("Fast RUN"), vec!["fast", "run"]);
    }

    #[test]
    fn test_identical_texts_score_one() {
        let s = similarity("常见含义甲; 常见含义乙", "常见含义甲; 常见含义乙");
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(similarity("罕见用法", "常见含义甲; 常见含义乙"), 0.0);
    }

    #[test]
    fn test_partial_overlap_in_open_interval() {
        let s = similarity("快速的 迅速地", "快速的 立刻");
        assert!(s > 0.0 && s < 1.0, "score = {}", s);
    }

    #[test]
    fn test_degenerate_inputs_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("快速的", ""), 0.0);
        assert_eq!(similarity("", "快速的"), 0.0);
        // 纯分隔符分不出词元
        assert_eq!(similarity(";;,", "快速的"), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = "快速的; 迅速地";
        let b = "立刻; 快速的";
        assert!((similarity(a, b) - similarity(b, a)).abs() < 1e-12);
    }
}
