//! 저장용 데이터셋
//!
//! 파싱 결과(Project)를 저장 계층이 쓰는 형태로 펼친다.
//! - items: 공종·항목명이 같은 내역을 하나로 묶은 목록 (ItemId = 인덱스)
//! - records: 파싱된 Item 하나당 레코드 하나, ItemId로 items를 참조

use crate::error::{Error, Result};
use crate::types::Project;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// items 배열의 인덱스
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

/// 중복 제거된 내역 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub category: String,
    pub name: String,
    /// 위치 문자열을 뺀 항목명 (TagStage에서 채워짐)
    #[serde(default)]
    pub base_name: Option<String>,
}

/// 공사별 비용 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub item_id: ItemId,
    /// 입력 순서상의 공사 번호
    pub project_id: usize,
    pub project_name: String,
    pub sheet_name: String,
    #[serde(default)]
    pub period: String,
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub quarter: Option<u32>,
    #[serde(default)]
    pub region: Option<String>,
    pub number: String,
    #[serde(default)]
    pub vendor: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostDataset {
    pub items: Vec<CatalogItem>,
    pub records: Vec<CostRecord>,
}

impl CostDataset {
    /// Project 목록을 펼친다 (시트 순서, 행 순서 유지)
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut dataset = Self::default();
        let mut index: HashMap<(String, String), ItemId> = HashMap::new();

        for (project_id, project) in projects.iter().enumerate() {
            for item in &project.items {
                let key = (item.category.clone(), item.item_name.clone());
                let item_id = *index.entry(key).or_insert_with(|| {
                    let id = ItemId(dataset.items.len());
                    dataset.items.push(CatalogItem {
                        id,
                        category: item.category.clone(),
                        name: item.item_name.clone(),
                        base_name: None,
                    });
                    id
                });

                dataset.records.push(CostRecord {
                    item_id,
                    project_id,
                    project_name: project.name.clone(),
                    sheet_name: project.sheet_name.clone(),
                    period: project.period.clone(),
                    year: project.year,
                    month: project.month,
                    quarter: project.quarter,
                    region: project.region.clone(),
                    number: item.number.clone(),
                    vendor: item.vendor.clone(),
                    amount: item.amount,
                    notes: item.notes.clone(),
                    location: item.location.clone(),
                });
            }
        }

        dataset
    }

    pub fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.get(id.0)
    }

    /// 레코드가 참조하는 항목
    pub fn item_of(&self, record: &CostRecord) -> Option<&CatalogItem> {
        self.item(record.item_id)
    }

    /// 서로 다른 공사 수
    pub fn project_count(&self) -> usize {
        let mut ids: Vec<usize> = self.records.iter().map(|r| r.project_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// ItemId가 인덱스와 일치하고 모든 레코드가 유효한 항목을 가리키는지 확인
    pub fn validate(&self) -> Result<()> {
        if let Some((pos, item)) = self.items.iter().enumerate().find(|(i, item)| item.id.0 != *i) {
            return Err(Error::Dataset(format!(
                "항목 ID 불일치: 위치 {} 에 ID {}",
                pos, item.id.0
            )));
        }
        if let Some(record) = self.records.iter().find(|r| r.item_id.0 >= self.items.len()) {
            return Err(Error::Dataset(format!(
                "존재하지 않는 항목 참조: {} ({} {})",
                record.item_id.0, record.sheet_name, record.number
            )));
        }
        Ok(())
    }

    /// JSON 문자열에서 읽기
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
