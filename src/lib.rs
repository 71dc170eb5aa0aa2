//! 공사 정산 엑셀 파싱 도구
//!
//! 시트마다 한 건의 공사가 들어 있는 정산 워크북을 읽어
//! 공종·지역·분기·위치가 붙은 비용 레코드로 변환한다.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod scanner;
pub mod summary;
pub mod workbook;

pub use cost_ledger_common as common;
