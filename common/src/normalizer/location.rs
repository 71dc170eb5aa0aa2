//! 위치(공간) 태그 추출
//!
//! 항목명과 비고에서 "주방", "화장실" 같은 공간 키워드를 찾는다.
//! 각 키워드는 제외어 목록을 가지며, 제외어가 하나라도 포함되면
//! 해당 키워드는 건너뛴다 ("방수"의 "방" 등).

use crate::tables::LocationPattern;

/// 위치를 찾은 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    ItemName,
    Notes,
}

/// 위치 매칭 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub location: String,
    pub source: MatchSource,
}

/// 공간 키워드 매칭기
#[derive(Debug, Clone)]
pub struct LocationTagger {
    patterns: Vec<LocationPattern>,
}

impl LocationTagger {
    pub fn new(patterns: Vec<LocationPattern>) -> Self {
        Self { patterns }
    }

    /// 텍스트에서 처음 일치하는 위치 키워드 (선언 순서)
    pub fn match_text(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }

        for pattern in &self.patterns {
            if pattern.keyword.is_empty() {
                continue;
            }
            let excluded = pattern
                .exclusions
                .iter()
                .any(|ex| !ex.is_empty() && text.contains(ex.as_str()));
            if excluded {
                continue;
            }
            if text.contains(pattern.keyword.as_str()) {
                return Some(pattern.keyword.as_str());
            }
        }

        None
    }

    /// 항목명 우선, 없으면 비고에서 위치를 찾는다
    pub fn locate(&self, item_name: &str, notes: Option<&str>) -> Option<LocationMatch> {
        if let Some(location) = self.match_text(item_name) {
            return Some(LocationMatch {
                location: location.to_string(),
                source: MatchSource::ItemName,
            });
        }

        notes
            .and_then(|n| self.match_text(n))
            .map(|location| LocationMatch {
                location: location.to_string(),
                source: MatchSource::Notes,
            })
    }
}

/// 항목명에서 위치 문자열을 제거한 기본명
///
/// 처음 나오는 위치 문자열 하나만 제거한다. 남는 글자가 없으면 `None`.
pub fn base_name(item_name: &str, location: &str) -> Option<String> {
    if location.is_empty() || !item_name.contains(location) {
        return None;
    }

    let stripped = item_name.replacen(location, "", 1);
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
