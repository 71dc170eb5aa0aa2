use crate::cli::ExportFormat;
use crate::error::{LedgerError, Result};
use cost_ledger_common::ClassifierTables;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 사용자 분류표 JSON (없으면 내장 분류표)
    pub dictionary_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub default_format: ExportFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LedgerError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("cost-ledger").join("config.json"))
    }

    /// 분류표 로드 (지정 파일 → 내장 분류표)
    pub fn load_tables(&self) -> Result<ClassifierTables> {
        match &self.dictionary_path {
            Some(path) => {
                if !path.exists() {
                    return Err(LedgerError::FileNotFound(path.display().to_string()));
                }
                tracing::info!(path = %path.display(), "사용자 분류표 사용");
                Ok(ClassifierTables::from_file(path)?)
            }
            None => Ok(ClassifierTables::default()),
        }
    }

    pub fn set_dictionary(&mut self, path: Option<PathBuf>) -> Result<()> {
        self.dictionary_path = path;
        self.save()
    }
}
