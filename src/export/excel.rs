//! 비용 레코드 엑셀 출력

use crate::error::{LedgerError, Result};
use cost_ledger_common::CostDataset;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "records";

const HEADERS: &[(&str, f64)] = &[
    ("프로젝트", 30.0),
    ("시트", 16.0),
    ("기간", 18.0),
    ("연도", 8.0),
    ("월", 6.0),
    ("분기", 6.0),
    ("지역", 10.0),
    ("번호", 8.0),
    ("공종", 10.0),
    ("항목명", 24.0),
    ("기본명", 18.0),
    ("업체", 16.0),
    ("금액", 14.0),
    ("비고", 30.0),
    ("위치", 10.0),
];

fn excel_err(e: XlsxError) -> LedgerError {
    LedgerError::ExcelGeneration(e.to_string())
}

/// 데이터셋을 엑셀 바이트로 생성
pub fn generate_excel_buffer(dataset: &CostDataset) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("#,##0");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(excel_err)?;

    for (col, (title, width)) in HEADERS.iter().enumerate() {
        let col = col as u16;
        sheet
            .write_string_with_format(0, col, *title, &header_format)
            .map_err(excel_err)?;
        sheet.set_column_width(col, *width).map_err(excel_err)?;
    }

    for (index, record) in dataset.records.iter().enumerate() {
        let row = index as u32 + 1;
        let item = dataset.item_of(record);
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();

        let texts: [(u16, String); 11] = [
            (0, record.project_name.clone()),
            (1, record.sheet_name.clone()),
            (2, record.period.clone()),
            (6, opt(&record.region)),
            (7, record.number.clone()),
            (8, item.map(|i| i.category.clone()).unwrap_or_default()),
            (9, item.map(|i| i.name.clone()).unwrap_or_default()),
            (10, item.and_then(|i| i.base_name.clone()).unwrap_or_default()),
            (11, opt(&record.vendor)),
            (13, opt(&record.notes)),
            (14, opt(&record.location)),
        ];
        for (col, text) in &texts {
            if !text.is_empty() {
                sheet.write_string(row, *col, text).map_err(excel_err)?;
            }
        }

        sheet.write_number(row, 3, record.year as f64).map_err(excel_err)?;
        if let Some(month) = record.month {
            sheet.write_number(row, 4, month as f64).map_err(excel_err)?;
        }
        if let Some(quarter) = record.quarter {
            sheet.write_number(row, 5, quarter as f64).map_err(excel_err)?;
        }
        sheet
            .write_number_with_format(row, 12, record.amount, &amount_format)
            .map_err(excel_err)?;
    }

    workbook.save_to_buffer().map_err(excel_err)
}

pub fn generate_excel(dataset: &CostDataset, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(dataset)?;
    super::ensure_parent_dir(output_path)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
