//! 词库表读取
//!
//! 读取上传的Excel词库：必需 '单词' 和 '释义' 两列，
//! 可选 '有道释义' 列（离线模式使用，免抓取）。

use crate::error::{Result, ShiyiError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 词库中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub word: String,
    pub user_definition: String,
    /// 表格自带的有道释义列（存在该列时为 Some，含空串）
    pub reference_definition: Option<String>,
}

const COL_WORD: &str = "单词";
const COL_DEFINITION: &str = "释义";
const COL_REFERENCE: &str = "有道释义";

/// 读取词库表
///
/// `sheet` 为 None 时取第一个工作表。单词列为空的行跳过，
/// 释义列为空的行保留为空串（后续自然落入"需核查"档）。
pub fn read_wordlist(path: &Path, sheet: Option<&str>) -> Result<Vec<WordEntry>> {
    if !path.exists() {
        return Err(ShiyiError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ShiyiError::SpreadsheetRead(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(ShiyiError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ShiyiError::SheetNotFound("（工作簿为空）".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ShiyiError::SpreadsheetRead(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| ShiyiError::MissingColumns(format!("'{}' 为空表", sheet_name)))?;

    let find_column = |name: &str| {
        header
            .iter()
            .position(|cell| cell_text(cell).trim() == name)
    };
    let word_idx = find_column(COL_WORD);
    let definition_idx = find_column(COL_DEFINITION);
    let reference_idx = find_column(COL_REFERENCE);

    let (word_idx, definition_idx) = match (word_idx, definition_idx) {
        (Some(w), Some(d)) => (w, d),
        _ => {
            let mut missing = Vec::new();
            if word_idx.is_none() {
                missing.push(COL_WORD);
            }
            if definition_idx.is_none() {
                missing.push(COL_DEFINITION);
            }
            return Err(ShiyiError::MissingColumns(missing.join("、")));
        }
    };

    let mut entries = Vec::new();
    for row in rows {
        let word = row.get(word_idx).map(cell_text).unwrap_or_default();
        let word = word.trim().to_string();
        if word.is_empty() {
            continue;
        }

        let user_definition = row
            .get(definition_idx)
            .map(cell_text)
            .unwrap_or_default()
            .trim()
            .to_string();
        let reference_definition = reference_idx
            .map(|idx| row.get(idx).map(cell_text).unwrap_or_default().trim().to_string());

        entries.push(WordEntry {
            word,
            user_definition,
            reference_definition,
        });
    }

    Ok(entries)
}

/// 单元格转文本（数值单词如 "2024" 也容忍）
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
