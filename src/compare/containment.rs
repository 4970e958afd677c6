//! 释义包含判定
//!
//! 用户释义的每个义项都能在有道释义的某个义项里按字面找到时，判定为"包含"。

/// 单个用户义项是否被某个参考义项包含
///
/// 大小写敏感的字面子串匹配。空义项只匹配空的参考义项，
/// 否则空串会被任何字符串包含，空释义就会误判为完全包含。
fn term_contained(user: &str, reference: &str) -> bool {
    if user.is_empty() {
        reference.is_empty()
    } else {
        reference.contains(user)
    }
}

/// 所有用户义项是否都被参考释义包含
///
/// 对用户义项取全称量词：任一义项找不到归属即为 `false`。
/// 用户义项列表为空时平凡成立（上游切分保证至少产出一个义项）。
pub fn is_fully_contained(user_terms: &[String], reference_terms: &[String]) -> bool {
    user_terms
        .iter()
        .all(|u| reference_terms.iter().any(|r| term_contained(u, r)))
}
