use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("엑셀 파일을 읽을 수 없습니다: {0}")]
    Workbook(String),

    #[error("엑셀 파일이 없습니다: {0}")]
    NoWorkbooksFound(String),

    #[error("엑셀 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] cost_ledger_common::Error),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
