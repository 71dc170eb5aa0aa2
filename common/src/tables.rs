//! 분류 테이블 모듈
//!
//! 공종 사전, 지명 목록, 위치 키워드를 하나의 설정 객체로 묶는다.
//! 모든 테이블은 배열이므로 JSON에서 읽어도 선언 순서가 유지된다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 공종 키워드 → 카테고리
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }
}

/// 위치 키워드와 제외어
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPattern {
    pub keyword: String,
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl LocationPattern {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            exclusions: Vec::new(),
        }
    }

    pub fn with_exclusions(keyword: impl Into<String>, exclusions: &[&str]) -> Self {
        Self {
            keyword: keyword.into(),
            exclusions: exclusions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 분류기 설정 전체
///
/// JSON에서 빠진 필드는 내장 테이블로 채워진다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierTables {
    pub categories: Vec<CategoryRule>,
    pub default_category: String,
    pub regions: Vec<String>,
    pub locations: Vec<LocationPattern>,
}

impl Default for ClassifierTables {
    fn default() -> Self {
        Self {
            categories: builtin_categories(),
            default_category: "기타".into(),
            regions: builtin_regions(),
            locations: builtin_locations(),
        }
    }
}

impl ClassifierTables {
    /// JSON 파일에서 읽기
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 읽기
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_category.trim().is_empty() {
            return Err(Error::Tables("기본 카테고리가 비어 있습니다".into()));
        }
        if let Some(rule) = self.categories.iter().find(|r| r.keyword.is_empty()) {
            return Err(Error::Tables(format!(
                "빈 공종 키워드가 있습니다 (카테고리: {})",
                rule.category
            )));
        }
        if self.locations.iter().any(|p| p.keyword.is_empty()) {
            return Err(Error::Tables("빈 위치 키워드가 있습니다".into()));
        }
        Ok(())
    }
}

fn builtin_categories() -> Vec<CategoryRule> {
    [
        ("철거", "철거"),
        ("폐기물", "철거"),
        ("설비", "설비"),
        ("목공", "목공"),
        ("샷시", "창호"),
        ("창호", "창호"),
        ("중문", "창호"),
        ("도배", "도배"),
        ("필름", "필름"),
        ("타일", "타일"),
        ("전기", "전기"),
        ("조명", "전기"),
        ("수도", "배관"),
        ("배관", "배관"),
        ("마루", "마루"),
        ("탄성코트", "바닥"),
        ("장판", "바닥"),
        ("바닥", "바닥"),
        ("도장", "도장"),
        ("페인트", "도장"),
        ("방수", "방수"),
        ("미장", "미장"),
        ("가구", "가구"),
        ("싱크", "가구"),
        ("욕실", "욕실"),
        ("도기", "욕실"),
    ]
    .into_iter()
    .map(|(keyword, category)| CategoryRule::new(keyword, category))
    .collect()
}

fn builtin_regions() -> Vec<String> {
    [
        // 광역 단위
        "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종",
        "경기", "강원", "충북", "충남", "전북", "전남", "경북", "경남", "제주",
        // 시/구/신도시
        "강남", "서초", "송파", "강동", "마포", "용산", "성동", "광진",
        "영등포", "양천", "목동", "노원", "은평", "관악", "동작",
        "분당", "판교", "수원", "광교", "용인", "수지", "기흥", "성남",
        "동탄", "화성", "평택", "오산", "안양", "평촌", "과천", "의왕",
        "군포", "산본", "부천", "광명", "시흥", "안산", "김포", "고양",
        "일산", "파주", "운정", "의정부", "남양주", "다산", "구리", "하남",
        "미사", "위례", "송도", "청라", "검단", "천안", "청주",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn builtin_locations() -> Vec<LocationPattern> {
    let mut patterns: Vec<LocationPattern> = [
        "주방", "거실", "안방", "화장실", "욕실", "베란다", "발코니",
        "현관", "복도", "드레스룸", "서재", "창고", "다용도실",
    ]
    .into_iter()
    .map(LocationPattern::new)
    .collect();

    patterns.push(LocationPattern::with_exclusions(
        "방",
        &["방수", "방문", "방충", "방음", "방범", "방열"],
    ));

    patterns
}
