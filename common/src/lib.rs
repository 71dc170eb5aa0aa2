//! Cost Ledger Common Library
//!
//! 정산 시트 파싱 모델과 분류기. 파일 입출력은 하지 않는다.

pub mod dataset;
pub mod error;
pub mod normalizer;
pub mod sheet;
pub mod tables;
pub mod tagger;
pub mod types;

pub use dataset::{CatalogItem, CostDataset, CostRecord, ItemId};
pub use error::{Error, Result};
pub use normalizer::Classifiers;
pub use sheet::{ItemColumns, SheetParser, SheetTemplate};
pub use tables::{CategoryRule, ClassifierTables, LocationPattern};
pub use tagger::{TagStage, TagStats};
pub use types::{Item, Project};
