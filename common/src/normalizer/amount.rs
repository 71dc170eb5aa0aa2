//! 금액 문자열 파싱
//!
//! 천 단위 구분자, 통화 기호, 공백을 제거한 뒤 숫자로 변환한다.
//! 양수 여부는 호출하는 쪽에서 확인한다.

/// 금액 문자열에서 제거하는 문자인지 판정
fn is_noise(c: char) -> bool {
    matches!(c, ',' | '₩' | '원') || c.is_whitespace()
}

/// 금액 문자열을 숫자로 변환
///
/// 숫자로 해석할 수 없으면 `None`을 반환한다 (0이 아님).
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !is_noise(*c)).collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_with_separators() {
        assert_eq!(parse_amount("1,234,500원"), Some(1234500.0));
        assert_eq!(parse_amount("12 350 ₩"), Some(12350.0));
        assert_eq!(parse_amount("  ₩3,000,000 "), Some(3000000.0));
    }

    #[test]
    fn test_parse_amount_decimal() {
        assert_eq!(parse_amount("1234.5"), Some(1234.5));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("원"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_parse_amount_keeps_non_positive() {
        // 양수 검사는 호출하는 쪽의 책임
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-5,000"), Some(-5000.0));
    }
}
