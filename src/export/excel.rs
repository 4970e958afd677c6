//! 多表Excel报告生成
//!
//! 三个工作表：全部结果 / 需人工复查 / 高一致。
//! 后两个表是对已算好的等级做纯过滤，不重新比对。

use crate::compare::{CheckedRecord, Tier};
use crate::error::{Result, ShiyiError};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

const HEADERS: &[&str] = &[
    "单词",
    "释义",
    "有道释义",
    "相似度",
    "释义包含",
    "常用度",
    "相似度等级",
    "需人工复查",
];

const COLUMN_WIDTHS: &[f64] = &[16.0, 32.0, 40.0, 10.0, 10.0, 10.0, 12.0, 12.0];

/// 生成比对报告
pub fn generate_report(rows: &[CheckedRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let all: Vec<&CheckedRecord> = rows.iter().collect();
    let review: Vec<&CheckedRecord> = rows.iter().filter(|r| r.needs_manual_review).collect();
    let consistent: Vec<&CheckedRecord> = rows
        .iter()
        .filter(|r| r.tier == Tier::HighConsistency)
        .collect();

    write_sheet(workbook.add_worksheet(), "全部结果", &all)?;
    write_sheet(workbook.add_worksheet(), "需人工复查", &review)?;
    write_sheet(workbook.add_worksheet(), "高一致", &consistent)?;

    workbook
        .save(output_path)
        .map_err(|e| ShiyiError::ExcelGeneration(format!("保存失败: {}", e)))?;

    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, name: &str, rows: &[&CheckedRecord]) -> Result<()> {
    worksheet
        .set_name(name)
        .map_err(|e| ShiyiError::ExcelGeneration(format!("工作表命名失败: {}", e)))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter);

    // 相似度按3位小数展示
    let score_format = Format::new()
        .set_num_format("0.000")
        .set_align(FormatAlign::Center);

    let flag_format = Format::new().set_align(FormatAlign::Center);

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| ShiyiError::ExcelGeneration(format!("列宽设置失败: {}", e)))?;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| ShiyiError::ExcelGeneration(format!("表头写入失败: {}", e)))?;
    }

    for (i, record) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let excel_err = |e: rust_xlsxwriter::XlsxError| {
            ShiyiError::ExcelGeneration(format!("'{}' 第{}行写入失败: {}", name, row, e))
        };

        worksheet
            .write_string_with_format(row, 0, &record.word, &text_format)
            .map_err(excel_err)?;
        worksheet
            .write_string_with_format(row, 1, &record.user_definition, &text_format)
            .map_err(excel_err)?;
        worksheet
            .write_string_with_format(row, 2, &record.youdao_definition, &text_format)
            .map_err(excel_err)?;
        worksheet
            .write_number_with_format(row, 3, record.similarity, &score_format)
            .map_err(excel_err)?;
        worksheet
            .write_string_with_format(row, 4, flag_label(record.is_contained), &flag_format)
            .map_err(excel_err)?;
        worksheet
            .write_number_with_format(row, 5, record.commonness, &score_format)
            .map_err(excel_err)?;
        worksheet
            .write_string_with_format(row, 6, record.tier.label(), &flag_format)
            .map_err(excel_err)?;
        worksheet
            .write_string_with_format(row, 7, flag_label(record.needs_manual_review), &flag_format)
            .map_err(excel_err)?;
    }

    Ok(())
}

fn flag_label(flag: bool) -> &'static str {
    if flag {
        "是"
    } else {
        "否"
    }
}
