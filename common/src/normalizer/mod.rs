//! 분류기 모듈
//!
//! 시트 파싱 중 자유 텍스트 필드를 정규화한다.
//!
//! ## 구성
//! 1. 금액 파싱
//! 2. 공종 → 카테고리
//! 3. 공사명 → 지역
//! 4. 공사 기간 → 연/월/분기
//! 5. 항목명/비고 → 위치 (별도 TagStage에서 사용)

pub mod amount;
pub mod category;
pub mod location;
pub mod period;
pub mod region;

use crate::tables::ClassifierTables;
use category::CategoryNormalizer;
use location::LocationTagger;
use region::RegionExtractor;

/// 시트 파싱에 쓰는 분류기 묶음
#[derive(Debug, Clone)]
pub struct Classifiers {
    pub category: CategoryNormalizer,
    pub region: RegionExtractor,
}

impl Classifiers {
    pub fn from_tables(tables: &ClassifierTables) -> Self {
        Self {
            category: CategoryNormalizer::new(
                tables.categories.clone(),
                tables.default_category.clone(),
            ),
            region: RegionExtractor::new(tables.regions.clone()),
        }
    }
}

impl Default for Classifiers {
    fn default() -> Self {
        Self::from_tables(&ClassifierTables::default())
    }
}

/// 위치 태거 생성
pub fn location_tagger(tables: &ClassifierTables) -> LocationTagger {
    LocationTagger::new(tables.locations.clone())
}
