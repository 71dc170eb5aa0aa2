use crate::error::{LedgerError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct WorkbookInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 엑셀 프로그램이 만드는 잠금 파일
const LOCK_FILE_PREFIX: &str = "~$";

fn is_workbook_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    WORKBOOK_EXTENSIONS.contains(&lower.as_str())
}

pub fn scan_folder(folder: &Path) -> Result<Vec<WorkbookInfo>> {
    if !folder.is_dir() {
        return Err(LedgerError::FolderNotFound(folder.display().to_string()));
    }

    let mut workbooks = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 바로 아래만 (재귀하지 않음)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if file_name.starts_with(LOCK_FILE_PREFIX) {
            continue;
        }

        if let Some(ext) = path.extension() {
            if is_workbook_extension(&ext.to_string_lossy()) {
                workbooks.push(WorkbookInfo {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // 파일 이름순
    workbooks.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(workbooks)
}

/// 파일이면 그대로, 폴더면 안의 엑셀 파일 목록
pub fn resolve_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.exists() {
        return Err(LedgerError::FileNotFound(input.display().to_string()));
    }

    let workbooks = scan_folder(input)?;
    if workbooks.is_empty() {
        return Err(LedgerError::NoWorkbooksFound(input.display().to_string()));
    }
    Ok(workbooks.into_iter().map(|w| w.path).collect())
}
