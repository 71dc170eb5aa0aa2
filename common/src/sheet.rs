//! 워크시트 파싱
//!
//! 시트 하나(셀 문자열의 2차원 배열)를 Project로 변환한다.
//! 헤더 추론 없이 고정 좌표로 읽는다.

use crate::normalizer::amount::parse_amount;
use crate::normalizer::period::{current_year, extract_period_with_fallback};
use crate::normalizer::Classifiers;
use crate::types::{Item, Project};

/// 내역 행의 열 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemColumns {
    pub number: usize,
    pub category: usize,
    pub vendor: usize,
    pub amount: usize,
    pub notes: usize,
}

/// 정산 시트 양식의 고정 좌표
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetTemplate {
    pub version: &'static str,
    /// 공사명 셀 (행, 열)
    pub name_cell: (usize, usize),
    /// 공사 기간 셀 (행, 열)
    pub period_cell: (usize, usize),
    /// 내역이 시작되는 행
    pub first_item_row: usize,
    /// 이보다 행이 적으면 양식이 아닌 것으로 본다
    pub min_rows: usize,
    /// 내역 행의 최소 셀 수
    pub min_item_cells: usize,
    pub columns: ItemColumns,
}

impl SheetTemplate {
    /// 메타데이터 1~7행, 내역 8행부터
    pub const V1: SheetTemplate = SheetTemplate {
        version: "v1",
        name_cell: (1, 2),
        period_cell: (2, 2),
        first_item_row: 7,
        min_rows: 8,
        min_item_cells: 4,
        columns: ItemColumns {
            number: 0,
            category: 1,
            vendor: 2,
            amount: 3,
            notes: 6,
        },
    };
}

impl Default for SheetTemplate {
    fn default() -> Self {
        Self::V1
    }
}

/// 셀 값 (공백 제거, 없으면 빈 문자열)
fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(|s| s.trim()).unwrap_or_default()
}

/// 메타데이터 셀 값
fn meta_cell(rows: &[Vec<String>], (r, c): (usize, usize)) -> &str {
    rows.get(r).map(|row| cell(row, c)).unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 시트 → Project 변환기
#[derive(Debug, Clone, Default)]
pub struct SheetParser {
    template: SheetTemplate,
    classifiers: Classifiers,
    fallback_year: Option<i32>,
}

impl SheetParser {
    pub fn new(template: SheetTemplate, classifiers: Classifiers) -> Self {
        Self {
            template,
            classifiers,
            fallback_year: None,
        }
    }

    /// 기간을 읽지 못했을 때 쓸 연도를 고정
    pub fn with_fallback_year(mut self, year: i32) -> Self {
        self.fallback_year = Some(year);
        self
    }

    /// 시트를 파싱한다
    ///
    /// 행이 부족하거나 유효한 내역이 없으면 경고를 남기고 `None`.
    pub fn parse(&self, sheet_name: &str, rows: &[Vec<String>]) -> Option<Project> {
        let t = &self.template;

        if rows.len() < t.min_rows {
            tracing::warn!(
                sheet = sheet_name,
                rows = rows.len(),
                template = t.version,
                "행 수 부족으로 시트를 건너뜀"
            );
            return None;
        }

        let name = match meta_cell(rows, t.name_cell) {
            "" => sheet_name.trim().to_string(),
            value => value.to_string(),
        };
        let period = meta_cell(rows, t.period_cell).to_string();

        let fallback_year = self.fallback_year.unwrap_or_else(current_year);
        let info = extract_period_with_fallback(&period, fallback_year);
        let region = self.classifiers.region.extract(&name).map(String::from);

        let items: Vec<Item> = rows
            .iter()
            .enumerate()
            .skip(t.first_item_row)
            .filter_map(|(index, row)| self.parse_row(sheet_name, index, row))
            .collect();

        if items.is_empty() {
            tracing::warn!(sheet = sheet_name, "유효한 내역이 없어 시트를 건너뜀");
            return None;
        }

        Some(Project {
            sheet_name: sheet_name.to_string(),
            name,
            period,
            year: info.year,
            month: info.month,
            quarter: info.quarter,
            region,
            items,
        })
    }

    /// 내역 행 하나를 읽는다 (조건 미달이면 조용히 건너뜀)
    fn parse_row(&self, sheet_name: &str, index: usize, row: &[String]) -> Option<Item> {
        let cols = &self.template.columns;

        if row.len() < self.template.min_item_cells {
            return None;
        }

        let number = cell(row, cols.number);
        let category_raw = cell(row, cols.category);
        let amount_str = cell(row, cols.amount);

        if number.is_empty() || category_raw.is_empty() || amount_str.is_empty() {
            return None;
        }

        let amount = match parse_amount(amount_str) {
            Some(value) if value > 0.0 => value,
            _ => {
                tracing::debug!(sheet = sheet_name, row = index, amount = amount_str, "금액 불량 행 건너뜀");
                return None;
            }
        };

        let normalized = self.classifiers.category.normalize(category_raw);

        Some(Item {
            number: number.to_string(),
            category: normalized.category,
            item_name: normalized.item_name,
            vendor: non_empty(cell(row, cols.vendor)),
            amount,
            notes: non_empty(cell(row, cols.notes)),
            location: None,
        })
    }
}
