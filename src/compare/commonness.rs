//! 常用度计算
//!
//! 有道释义的义项按常用程度排序，用户释义命中第一义项算"用法常见"，
//! 只命中第二义项说明写的是次常用义。第三个及以后的义项不计分。

/// 排名权重：第一义项 1.0，第二义项 0.5
const RANK_WEIGHTS: [f64; 2] = [1.0, 0.5];

/// 用户释义相对参考义项排序的常用度，取值 [0, 1]
///
/// 每个用户义项是哪个排名义项的子串，就累加对应权重；同一个用户义项
/// 同时命中前两个义项时两份权重都累加（沿袭原有口径，最后靠
/// `min(..., 1.0)` 截断，不在单项上封顶）。
/// 总分除以用户义项数；用户义项列表为空时为 0.0，空义项不计分
/// 但计入分母。
pub fn score(user_terms: &[String], reference_terms: &[String]) -> f64 {
    if user_terms.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for user in user_terms {
        if user.is_empty() {
            continue;
        }
        for (rank, weight) in RANK_WEIGHTS.iter().enumerate() {
            if let Some(reference) = reference_terms.get(rank) {
                if reference.contains(user.as_str()) {
                    total += weight;
                }
            }
        }
    }

    (total / user_terms.len() as f64).min(1.0)
}
