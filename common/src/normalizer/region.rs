//! 공사명에서 지역 추출
//!
//! 지명 목록을 선언 순서대로 검사해 처음 포함된 항목을 반환한다.
//! 최장 일치나 점수 계산은 하지 않는다.

/// 지명 목록 기반 지역 추출기
#[derive(Debug, Clone)]
pub struct RegionExtractor {
    gazetteer: Vec<String>,
}

impl RegionExtractor {
    pub fn new(gazetteer: Vec<String>) -> Self {
        Self { gazetteer }
    }

    /// 공사명에 처음 포함된 지명
    pub fn extract(&self, project_name: &str) -> Option<&str> {
        self.gazetteer
            .iter()
            .find(|place| !place.is_empty() && project_name.contains(place.as_str()))
            .map(|place| place.as_str())
    }
}
