//! 공종 카테고리 정규화
//!
//! 원문 공종 텍스트를 고정된 카테고리 체계로 매핑한다.
//! 여러 키워드가 겹칠 때는 사전의 선언 순서가 우선한다.

use crate::tables::CategoryRule;

/// 정규화 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCategory {
    pub category: String,
    pub item_name: String,
}

/// 공종 → 카테고리 변환기
#[derive(Debug, Clone)]
pub struct CategoryNormalizer {
    rules: Vec<CategoryRule>,
    default_category: String,
}

impl CategoryNormalizer {
    pub fn new(rules: Vec<CategoryRule>, default_category: impl Into<String>) -> Self {
        Self {
            rules,
            default_category: default_category.into(),
        }
    }

    /// 키워드와 정확히 일치하는 규칙의 카테고리
    fn lookup(&self, keyword: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.keyword == keyword)
            .map(|rule| rule.category.as_str())
    }

    /// 원문에 포함된 첫 번째 키워드의 카테고리 (선언 순서)
    fn first_contained(&self, text: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| !rule.keyword.is_empty() && text.contains(rule.keyword.as_str()))
            .map(|rule| rule.category.as_str())
    }

    /// 공종 원문을 정규화
    ///
    /// - "/"가 있으면 첫 토큰을 사전에서 찾고, 없으면 첫 토큰 자체를 카테고리로 쓴다
    /// - "/"가 없으면 선언 순서대로 부분 문자열 검색
    pub fn normalize(&self, raw: &str) -> NormalizedCategory {
        let text = raw.trim();

        if text.contains('/') {
            let tokens: Vec<&str> = text.split('/').collect();
            let head = tokens.first().map(|t| t.trim()).unwrap_or_default();

            let category = if head.is_empty() {
                self.default_category.clone()
            } else {
                self.lookup(head).unwrap_or(head).to_string()
            };

            return NormalizedCategory {
                category,
                item_name: tokens.join("/"),
            };
        }

        let category = self
            .first_contained(text)
            .unwrap_or(&self.default_category)
            .to_string();

        NormalizedCategory {
            category,
            item_name: text.to_string(),
        }
    }
}
