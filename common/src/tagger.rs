//! 위치 태깅 단계 (TagStage)
//!
//! 파싱이 끝난 데이터셋을 다시 읽어 레코드별 위치와 항목별 기본명을 기록한다.
//! 키워드 목록만 바꿔서 원본 엑셀 없이 다시 돌릴 수 있다.

use crate::dataset::CostDataset;
use crate::normalizer::location::{base_name, LocationTagger, MatchSource};
use crate::normalizer::location_tagger;
use crate::tables::ClassifierTables;

/// 태깅 통계
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStats {
    pub records: usize,
    /// 항목명에서 위치를 찾은 레코드 수
    pub tagged_by_name: usize,
    /// 비고에서 위치를 찾은 레코드 수
    pub tagged_by_notes: usize,
    pub untagged: usize,
    /// 기본명을 기록한 항목 수
    pub base_names: usize,
}

impl TagStats {
    pub fn tagged(&self) -> usize {
        self.tagged_by_name + self.tagged_by_notes
    }
}

/// 위치 태깅 단계
#[derive(Debug, Clone)]
pub struct TagStage {
    tagger: LocationTagger,
}

impl TagStage {
    pub fn new(tagger: LocationTagger) -> Self {
        Self { tagger }
    }

    pub fn from_tables(tables: &ClassifierTables) -> Self {
        Self::new(location_tagger(tables))
    }

    /// 데이터셋 전체를 다시 태깅한다
    ///
    /// 기존 위치·기본명은 이번 키워드 목록 기준으로 덮어쓴다.
    pub fn tag(&self, dataset: &mut CostDataset) -> TagStats {
        let mut stats = TagStats {
            records: dataset.records.len(),
            ..Default::default()
        };

        // 기본명은 항목 단위로 한 번만
        for item in &mut dataset.items {
            item.base_name = self
                .tagger
                .match_text(&item.name)
                .and_then(|location| base_name(&item.name, location));
            if item.base_name.is_some() {
                stats.base_names += 1;
            }
        }

        for record in &mut dataset.records {
            let name = dataset
                .items
                .get(record.item_id.0)
                .map(|item| item.name.as_str())
                .unwrap_or_default();

            let found = self.tagger.locate(name, record.notes.as_deref());
            match found.as_ref().map(|m| m.source) {
                Some(MatchSource::ItemName) => stats.tagged_by_name += 1,
                Some(MatchSource::Notes) => stats.tagged_by_notes += 1,
                None => stats.untagged += 1,
            }
            record.location = found.map(|m| m.location);
        }

        tracing::info!(
            records = stats.records,
            tagged = stats.tagged(),
            base_names = stats.base_names,
            "위치 태깅 완료"
        );

        stats
    }
}

impl Default for TagStage {
    fn default() -> Self {
        Self::from_tables(&ClassifierTables::default())
    }
}
