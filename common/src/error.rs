//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 형식 오류: {0}")]
    Json(#[from] serde_json::Error),

    /// 분류표(공종 사전, 위치 키워드) 검증 실패
    #[error("분류표 오류: {0}")]
    Tables(String),

    /// 데이터셋의 항목 ID 참조가 어긋남
    #[error("데이터셋 무결성 오류: {0}")]
    Dataset(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
