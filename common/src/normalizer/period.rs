//! 공사 기간 문자열에서 연/월/분기 추출
//!
//! "2020.8.4-8.22" 같은 자유 형식 문자열에서 첫 "연도.월"만 읽는다.
//! 일치하지 않으면 올해 연도로 대체하고 월/분기는 비운다.

use chrono::Datelike;
use regex::Regex;

/// 추출 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodInfo {
    pub year: i32,
    pub month: Option<u32>,
    pub quarter: Option<u32>,
}

/// 월 → 분기 (1..=4)
pub fn quarter_of(month: u32) -> u32 {
    month.div_ceil(3)
}

/// 올해 연도
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// 기간 문자열 해석 (대체 연도 = 올해)
pub fn extract_period(text: &str) -> PeriodInfo {
    extract_period_with_fallback(text, current_year())
}

/// 기간 문자열 해석 (대체 연도 지정)
pub fn extract_period_with_fallback(text: &str, fallback_year: i32) -> PeriodInfo {
    lazy_static::lazy_static! {
        static ref YEAR_MONTH_RE: Regex = Regex::new(r"(\d{4})\.(\d{1,2})").unwrap();
    }

    let fallback = PeriodInfo {
        year: fallback_year,
        month: None,
        quarter: None,
    };

    let Some(cap) = YEAR_MONTH_RE.captures(text) else {
        return fallback;
    };

    let Ok(year) = cap[1].parse::<i32>() else {
        return fallback;
    };

    // 범위를 벗어난 월은 연도만 남긴다
    let month = cap[2].parse::<u32>().ok().filter(|m| (1..=12).contains(m));

    PeriodInfo {
        year,
        month,
        quarter: month.map(quarter_of),
    }
}
