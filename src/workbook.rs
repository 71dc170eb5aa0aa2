//! 워크북 로더 (ParseStage)
//!
//! 엑셀 바이트 버퍼의 모든 시트를 순서대로 SheetParser에 넘긴다.
//! 시트 단위 실패는 로그만 남기고 건너뛰며, 워크북 자체를 열지 못할 때만 에러.

use crate::error::{LedgerError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use chrono::NaiveDateTime;
use cost_ledger_common::{Classifiers, ClassifierTables, Project, SheetParser, SheetTemplate};
use std::any::Any;
use std::io::Cursor;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// 패닉 페이로드의 메시지
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "알 수 없는 패닉".to_string()
    }
}

/// 기간 추출기가 읽을 수 있는 "YYYY.MM.DD" 형태
fn format_date(date: NaiveDateTime) -> String {
    date.format("%Y.%m.%d").to_string()
}

/// 엑셀 셀 → 문자열
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(date) => format_date(date),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// 범위를 A1 기준 2차원 문자열 배열로 변환
///
/// calamine의 범위는 첫 번째 값이 있는 셀에서 시작하므로 앞쪽을 빈 칸으로 채운다.
pub fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells: Vec<String> = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }
    rows
}

/// 워크북 로더
#[derive(Debug, Clone, Default)]
pub struct WorkbookLoader {
    parser: SheetParser,
}

impl WorkbookLoader {
    pub fn new(parser: SheetParser) -> Self {
        Self { parser }
    }

    pub fn from_tables(tables: &ClassifierTables) -> Self {
        Self::new(SheetParser::new(
            SheetTemplate::default(),
            Classifiers::from_tables(tables),
        ))
    }

    /// 바이트 버퍼에서 Project 목록을 읽는다 (시트 순서 유지)
    pub fn load(&self, bytes: &[u8]) -> Result<Vec<Project>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| LedgerError::Workbook(e.to_string()))?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let mut projects = Vec::new();

        for sheet_name in &sheet_names {
            // 손상된 시트 XML에서 calamine이 패닉할 수 있다
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                self.parse_sheet(&mut workbook, sheet_name)
            }));

            match outcome {
                Ok(Ok(Some(project))) => {
                    tracing::debug!(sheet = %sheet_name, items = project.items.len(), "시트 파싱 완료");
                    projects.push(project);
                }
                Ok(Ok(None)) => {}
                Ok(Err(e)) => {
                    tracing::warn!(sheet = %sheet_name, error = %e, "시트를 읽지 못해 건너뜀");
                }
                Err(payload) => {
                    tracing::warn!(
                        sheet = %sheet_name,
                        error = %panic_message(payload.as_ref()),
                        "시트 처리 중 패닉이 발생해 건너뜀"
                    );
                }
            }
        }

        tracing::info!(
            sheets = sheet_names.len(),
            projects = projects.len(),
            "워크북 파싱 완료"
        );

        Ok(projects)
    }

    /// 시트 하나를 읽어 파싱 (시트 범위 읽기 실패는 Err)
    fn parse_sheet(
        &self,
        workbook: &mut Sheets<Cursor<&[u8]>>,
        sheet_name: &str,
    ) -> std::result::Result<Option<Project>, calamine::Error> {
        let range = workbook.worksheet_range(sheet_name)?;
        let rows = range_to_rows(&range);
        Ok(self.parser.parse(sheet_name, &rows))
    }

    /// 파일을 메모리에 모두 읽은 뒤 파싱
    pub fn load_file(&self, path: &Path) -> Result<Vec<Project>> {
        if !path.exists() {
            return Err(LedgerError::FileNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        self.load(&bytes)
    }
}
