//! 파싱 결과의 타입 정의
//!
//! - Item: 시트의 유효한 행 하나
//! - Project: 워크시트 하나 (실제 공사 한 건)

use serde::{Deserialize, Serialize};

/// 공사 내역 한 줄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// 행 번호 (시트의 첫 열)
    pub number: String,

    /// 정규화된 공종 카테고리
    pub category: String,

    /// 원래 공종 텍스트 ("/" 구분자가 있으면 전체 문자열)
    pub item_name: String,

    #[serde(default)]
    pub vendor: Option<String>,

    /// 금액 (항상 0보다 큼)
    pub amount: f64,

    #[serde(default)]
    pub notes: Option<String>,

    /// 위치 태그 (TagStage에서만 채워짐)
    #[serde(default)]
    pub location: Option<String>,
}

/// 공사 한 건 (워크시트 하나)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 원본 시트 이름
    pub sheet_name: String,

    /// 공사명 (메타데이터 셀이 비어 있으면 시트 이름)
    pub name: String,

    /// 공사 기간 원문
    #[serde(default)]
    pub period: String,

    pub year: i32,

    #[serde(default)]
    pub month: Option<u32>,

    /// 분기 (1..=4)
    #[serde(default)]
    pub quarter: Option<u32>,

    #[serde(default)]
    pub region: Option<String>,

    /// 시트의 행 순서를 유지한 내역 (비어 있지 않음)
    pub items: Vec<Item>,
}

impl Project {
    /// 내역 금액 합계
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}
