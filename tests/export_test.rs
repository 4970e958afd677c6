//! 报告导出集成测试
//!
//! 生成多表Excel后用calamine读回，校验分表过滤与数值。

use calamine::{open_workbook_auto, Data, Reader};
use shiyi_check::compare::{CheckedRecord, Tier};
use tempfile::tempdir;

fn checked(word: &str, similarity: f64, is_contained: bool) -> CheckedRecord {
    let tier = Tier::classify(similarity);
    CheckedRecord {
        word: word.to_string(),
        user_definition: "快速, 迅速".to_string(),
        youdao_definition: "快速的; 迅速地; 立刻".to_string(),
        similarity,
        is_contained,
        commonness: 0.75,
        tier,
        needs_manual_review: tier == Tier::NeedsReview,
    }
}

#[test]
fn test_report_has_three_sheets_with_filtered_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");

    let rows = vec![
        checked("alpha", 1.0, true),
        checked("beta", 0.7, false),
        checked("gamma", 0.2, false),
        checked("delta", 0.85, false),
        checked("epsilon", 0.0, false),
    ];

    shiyi_check::export::generate_report(&rows, &output_path).expect("报告生成失败");
    assert!(output_path.exists(), "报告文件未生成");

    let mut workbook = open_workbook_auto(&output_path).expect("报告读回失败");
    assert_eq!(
        workbook.sheet_names(),
        vec![
            "全部结果".to_string(),
            "需人工复查".to_string(),
            "高一致".to_string()
        ]
    );

    // 表头占1行
    let data_rows = |range: &calamine::Range<Data>| range.rows().count().saturating_sub(1);

    let all = workbook.worksheet_range("全部结果").unwrap();
    assert_eq!(data_rows(&all), 5);

    let review = workbook.worksheet_range("需人工复查").unwrap();
    assert_eq!(data_rows(&review), 2); // gamma, epsilon

    let consistent = workbook.worksheet_range("高一致").unwrap();
    assert_eq!(data_rows(&consistent), 2); // alpha, delta
}

#[test]
fn test_report_cell_values() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("values.xlsx");

    let rows = vec![checked("alpha", 0.5, false)];
    shiyi_check::export::generate_report(&rows, &output_path).expect("报告生成失败");

    let mut workbook = open_workbook_auto(&output_path).expect("报告读回失败");
    let sheet = workbook.worksheet_range("全部结果").unwrap();

    let header: Vec<String> = sheet.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(
        header,
        vec!["单词", "释义", "有道释义", "相似度", "释义包含", "常用度", "相似度等级", "需人工复查"]
    );

    let row: Vec<&Data> = sheet.rows().nth(1).unwrap().iter().collect();
    assert_eq!(row[0], &Data::String("alpha".to_string()));
    assert_eq!(row[3], &Data::Float(0.5));
    assert_eq!(row[4], &Data::String("否".to_string()));
    assert_eq!(row[6], &Data::String("需核查".to_string()));
    assert_eq!(row[7], &Data::String("是".to_string()));
}

#[test]
fn test_report_with_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    // 空结果也要正常出表（只有表头）
    shiyi_check::export::generate_report(&[], &output_path).expect("空报告生成失败");
    assert!(output_path.exists());

    let mut workbook = open_workbook_auto(&output_path).expect("报告读回失败");
    let all = workbook.worksheet_range("全部结果").unwrap();
    assert_eq!(all.rows().count(), 1);
}
