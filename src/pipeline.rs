//! 파싱 → 태깅 파이프라인
//!
//! ParseStage(WorkbookLoader)와 TagStage를 저장 전에 메모리에서 연달아 실행한다.

use crate::error::Result;
use crate::workbook::WorkbookLoader;
use cost_ledger_common::{ClassifierTables, CostDataset, Project, TagStage, TagStats};
use std::path::Path;

/// 파이프라인 실행 결과
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub projects: Vec<Project>,
    pub dataset: CostDataset,
    /// 태깅을 건너뛰면 None
    pub tag_stats: Option<TagStats>,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    loader: WorkbookLoader,
    tag_stage: TagStage,
}

impl Pipeline {
    pub fn new(loader: WorkbookLoader, tag_stage: TagStage) -> Self {
        Self { loader, tag_stage }
    }

    pub fn from_tables(tables: &ClassifierTables) -> Self {
        Self::new(
            WorkbookLoader::from_tables(tables),
            TagStage::from_tables(tables),
        )
    }

    /// 이미 읽은 Project 목록을 데이터셋으로 만들고 필요하면 태깅
    pub fn finish(&self, projects: Vec<Project>, tag: bool) -> PipelineOutput {
        let mut dataset = CostDataset::from_projects(&projects);
        let tag_stats = tag.then(|| self.tag_stage.tag(&mut dataset));

        PipelineOutput {
            projects,
            dataset,
            tag_stats,
        }
    }

    /// 바이트 버퍼 하나를 처리
    pub fn run(&self, bytes: &[u8], tag: bool) -> Result<PipelineOutput> {
        let projects = self.loader.load(bytes)?;
        Ok(self.finish(projects, tag))
    }

    /// 여러 엑셀 파일을 순서대로 처리 (Project를 이어 붙임)
    pub fn run_files(&self, paths: &[impl AsRef<Path>], tag: bool) -> Result<PipelineOutput> {
        let mut projects = Vec::new();
        for path in paths {
            projects.extend(self.loader.load_file(path.as_ref())?);
        }
        Ok(self.finish(projects, tag))
    }
}
