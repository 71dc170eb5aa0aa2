//! 통합 테스트용 워크북 생성 도우미

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, Worksheet};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// 숫자로 읽히는 값은 숫자 셀로, 나머지는 문자열 셀로 쓴다
pub fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &str) {
    if value.is_empty() {
        return;
    }
    match value.parse::<f64>() {
        Ok(number) => {
            sheet.write_number(row, col, number).unwrap();
        }
        Err(_) => {
            sheet.write_string(row, col, value).unwrap();
        }
    }
}

/// 정산서 양식의 메타데이터 7행
pub fn write_header(sheet: &mut Worksheet, project: &str, period: &str) {
    write_cell(sheet, 0, 0, "공사 정산서");
    write_cell(sheet, 1, 1, "공사명");
    write_cell(sheet, 1, 2, project);
    write_cell(sheet, 2, 1, "공사기간");
    write_cell(sheet, 2, 2, period);
    for (col, title) in ["번호", "공종", "업체", "금액", "", "", "비고"].iter().enumerate() {
        write_cell(sheet, 6, col as u16, title);
    }
}

/// 내역 행 (8행부터)
pub fn write_items(sheet: &mut Worksheet, items: &[[&str; 7]]) {
    for (index, cells) in items.iter().enumerate() {
        let row = 7 + index as u32;
        for (col, value) in cells.iter().enumerate() {
            write_cell(sheet, row, col as u16, value);
        }
    }
}

/// 양식 그대로의 시트 추가
pub fn add_ledger_sheet(
    workbook: &mut Workbook,
    name: &str,
    project: &str,
    period: &str,
    items: &[[&str; 7]],
) {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name).unwrap();
    write_header(sheet, project, period);
    write_items(sheet, items);
}

/// 내역 행 하나
pub fn item<'a>(number: &'a str, category: &'a str, vendor: &'a str, amount: &'a str, notes: &'a str) -> [&'a str; 7] {
    [number, category, vendor, amount, "", "", notes]
}

/// A(유효, 10행) / B(6행, 무효) / C(유효 1행 + 금액 0 한 행)
pub fn three_sheet_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();

    let categories = ["철거", "설비", "목공", "샷시", "도배", "타일", "전기", "수도", "마루", "탄성코트"];
    let numbers = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
    let rows: Vec<[&str; 7]> = numbers
        .iter()
        .zip(categories.iter())
        .map(|(number, category)| item(number, category, "", "1,000,000원", ""))
        .collect();
    add_ledger_sheet(&mut workbook, "A", "동탄 센트럴파크 리모델링", "2020.8.4-8.22", &rows);

    let sheet_b = workbook.add_worksheet();
    sheet_b.set_name("B").unwrap();
    for row in 0..6 {
        write_cell(sheet_b, row, 0, "메모");
    }

    add_ledger_sheet(
        &mut workbook,
        "C",
        "서울 마포 32평",
        "2021.11.2-12.10",
        &[
            item("1", "화장실기구", "대림", "850000", "욕실 2개"),
            item("2", "도배", "", "0", ""),
        ],
    );

    workbook.save_to_buffer().unwrap()
}

/// 좋음 / 손상 대상 / 끝 순서의 세 시트. 가운데 시트가 xl/worksheets/sheet2.xml
pub fn sandwich_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    add_ledger_sheet(&mut workbook, "좋음", "동탄 리모델링", "2020.8.4", &[item("1", "도배", "", "500000", "")]);
    add_ledger_sheet(&mut workbook, "중간", "수원 욕실", "2021.3.2", &[item("1", "타일", "", "700000", "")]);
    add_ledger_sheet(&mut workbook, "끝", "서울 마포 32평", "2021.11.2", &[item("1", "전기", "", "300000", "")]);
    workbook.save_to_buffer().unwrap()
}

/// xlsx(zip) 안의 항목 하나를 고쳐 쓴 새 버퍼
pub fn rewrite_zip_entry(bytes: &[u8], entry: &str, edit: impl Fn(&str) -> String) -> Vec<u8> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).unwrap();
        let name = file.name().to_string();
        let mut content = Vec::new();
        file.read_to_end(&mut content).unwrap();

        if name == entry {
            let xml = String::from_utf8(content).unwrap();
            content = edit(&xml).into_bytes();
        }

        writer.start_file(name, SimpleFileOptions::default()).unwrap();
        writer.write_all(&content).unwrap();
    }

    writer.finish().unwrap().into_inner()
}
