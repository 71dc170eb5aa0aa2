//! 파싱 → 태깅 → 저장 통합 테스트

mod common;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use common::three_sheet_workbook;
use cost_ledger::cli::ExportFormat;
use cost_ledger::common::{ClassifierTables, LocationPattern, TagStage};
use cost_ledger::export;
use cost_ledger::pipeline::Pipeline;
use cost_ledger::summary::summarize;
use std::io::Cursor;
use tempfile::tempdir;

#[test]
fn test_pipeline_parses_and_tags() {
    let output = Pipeline::default().run(&three_sheet_workbook(), true).unwrap();

    assert_eq!(output.projects.len(), 2);
    assert_eq!(output.dataset.records.len(), 11);
    assert_eq!(output.dataset.project_count(), 2);

    // Project 자체는 태깅하지 않는다
    assert!(output.projects.iter().flat_map(|p| &p.items).all(|i| i.location.is_none()));

    let stats = output.tag_stats.unwrap();
    assert_eq!(stats.records, 11);
    assert_eq!(stats.tagged_by_name, 1);
    assert_eq!(stats.base_names, 1);

    let record = output.dataset.records.last().unwrap();
    assert_eq!(record.location.as_deref(), Some("화장실"));
    let item = output.dataset.item_of(record).unwrap();
    assert_eq!(item.name, "화장실기구");
    assert_eq!(item.base_name.as_deref(), Some("기구"));
}

#[test]
fn test_pipeline_without_tagging() {
    let output = Pipeline::default().run(&three_sheet_workbook(), false).unwrap();

    assert!(output.tag_stats.is_none());
    assert!(output.dataset.records.iter().all(|r| r.location.is_none()));
    assert!(output.dataset.items.iter().all(|i| i.base_name.is_none()));
}

#[test]
fn test_pipeline_is_idempotent() {
    let bytes = three_sheet_workbook();
    let pipeline = Pipeline::default();

    let first = pipeline.run(&bytes, true).unwrap();
    let second = pipeline.run(&bytes, true).unwrap();
    assert_eq!(first.dataset, second.dataset);
}

/// 저장된 JSON만으로 새 키워드 목록을 적용해 다시 태깅
#[test]
fn test_standalone_retag_from_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");

    let output = Pipeline::default().run(&three_sheet_workbook(), false).unwrap();
    export::write_json(&output.dataset, &path).unwrap();

    let mut tables = ClassifierTables::default();
    tables.locations.insert(0, LocationPattern::new("욕실"));

    let mut dataset = export::read_json(&path).unwrap();
    let stats = TagStage::from_tables(&tables).tag(&mut dataset);
    export::write_json(&dataset, &path).unwrap();

    // 항목명 "화장실기구"에서 먼저 찾으므로 비고의 "욕실"은 쓰이지 않는다
    let reloaded = export::read_json(&path).unwrap();
    let record = reloaded.records.last().unwrap();
    assert_eq!(record.location.as_deref(), Some("화장실"));
    assert_eq!(stats.tagged(), 1);
    assert_eq!(reloaded, dataset);
}

#[test]
fn test_export_both_formats() {
    let dir = tempdir().unwrap();
    let output = Pipeline::default().run(&three_sheet_workbook(), true).unwrap();

    let written =
        export::export_dataset(&output.dataset, ExportFormat::Both, dir.path(), "records").unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));

    let bytes = std::fs::read(dir.path().join("records.xlsx")).unwrap();
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.as_slice())).unwrap();
    let range = workbook.worksheet_range("records").unwrap();

    // 헤더 + 레코드 11행
    assert_eq!(range.height(), 12);
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("프로젝트".into())));
    assert_eq!(range.get_value((11, 14)), Some(&Data::String("화장실".into())));
    assert_eq!(range.get_value((11, 12)), Some(&Data::Float(850_000.0)));
}

#[test]
fn test_summary_of_pipeline_output() {
    let output = Pipeline::default().run(&three_sheet_workbook(), true).unwrap();
    let summary = summarize(&output.dataset);

    assert_eq!(summary.projects, 2);
    assert_eq!(summary.records, 11);
    assert_eq!(summary.total_amount, 10_850_000.0);
    assert_eq!(summary.tagged_records, 1);
    assert_eq!(summary.by_region[0].key, "동탄");
}
