//! 词库读取与错误处理测试
//!
//! 用rust_xlsxwriter现做词库文件，走真实的calamine读取路径。

use rust_xlsxwriter::Workbook;
use shiyi_check::error::ShiyiError;
use shiyi_check::ingest;
use std::path::Path;
use tempfile::tempdir;

fn write_wordlist(path: &Path, headers: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("词库").unwrap();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((i + 1) as u32, col as u16, *value).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_read_basic_wordlist() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("wordlist.xlsx");
    write_wordlist(
        &path,
        &["单词", "释义"],
        &[
            &["fast", "快速, 迅速"],
            &["rare", "罕见用法"],
        ],
    );

    let entries = ingest::read_wordlist(&path, None).expect("词库读取失败");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].word, "fast");
    assert_eq!(entries[0].user_definition, "快速, 迅速");
    // 没有 有道释义 列时为 None（需要联网抓取）
    assert!(entries[0].reference_definition.is_none());
}

#[test]
fn test_read_wordlist_with_reference_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("offline.xlsx");
    write_wordlist(
        &path,
        &["单词", "释义", "有道释义"],
        &[
            &["fast", "快速", "快速的; 迅速地"],
            &["miss", "某义", ""],
        ],
    );

    let entries = ingest::read_wordlist(&path, None).expect("词库读取失败");
    assert_eq!(
        entries[0].reference_definition.as_deref(),
        Some("快速的; 迅速地")
    );
    // 该列存在但单元格为空 → Some("")，离线模式按缺失释义降级处理
    assert_eq!(entries[1].reference_definition.as_deref(), Some(""));
}

#[test]
fn test_rows_without_word_are_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gaps.xlsx");
    write_wordlist(
        &path,
        &["单词", "释义"],
        &[
            &["fast", "快速"],
            &["", "无主释义"],
            &["slow", ""],
        ],
    );

    let entries = ingest::read_wordlist(&path, None).expect("词库读取失败");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].word, "slow");
    // 释义为空的行保留，后续自然落入需核查
    assert_eq!(entries[1].user_definition, "");
}

#[test]
fn test_named_sheet_selection() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sheets.xlsx");
    write_wordlist(&path, &["单词", "释义"], &[&["fast", "快速"]]);

    let entries = ingest::read_wordlist(&path, Some("词库")).expect("词库读取失败");
    assert_eq!(entries.len(), 1);

    let err = ingest::read_wordlist(&path, Some("不存在")).unwrap_err();
    assert!(matches!(err, ShiyiError::SheetNotFound(_)));
}

#[test]
fn test_missing_columns_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bad_headers.xlsx");
    write_wordlist(&path, &["word", "definition"], &[&["fast", "快速"]]);

    let err = ingest::read_wordlist(&path, None).unwrap_err();
    match err {
        ShiyiError::MissingColumns(cols) => {
            assert!(cols.contains("单词"), "missing = {}", cols);
            assert!(cols.contains("释义"), "missing = {}", cols);
        }
        other => panic!("期望MissingColumns，实际: {:?}", other),
    }
}

#[test]
fn test_nonexistent_file() {
    let err = ingest::read_wordlist(Path::new("/nonexistent/词库12345.xlsx"), None).unwrap_err();
    assert!(matches!(err, ShiyiError::FileNotFound(_)));
}
