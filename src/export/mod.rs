pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use cost_ledger_common::CostDataset;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.with_extension(extension)
    }
}

/// 출력 파일의 상위 폴더 생성
pub(crate) fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// 데이터셋 JSON 저장
pub fn write_json(dataset: &CostDataset, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, dataset.to_json()?)?;
    Ok(())
}

/// 데이터셋 JSON 읽기
pub fn read_json(input_path: &Path) -> Result<CostDataset> {
    let content = std::fs::read_to_string(input_path)?;
    Ok(CostDataset::from_json(&content)?)
}

/// 형식에 맞춰 출력하고 생성한 파일 경로를 돌려준다
pub fn export_dataset(
    dataset: &CostDataset,
    format: ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    if output.extension().is_none() {
        std::fs::create_dir_all(output)?;
    }

    let mut written = Vec::new();

    if matches!(format, ExportFormat::Json | ExportFormat::Both) {
        let path = output_path_for_format(output, title, "json");
        write_json(dataset, &path)?;
        written.push(path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_path_for_format(output, title, "xlsx");
        excel::generate_excel(dataset, &path)?;
        written.push(path);
    }

    Ok(written)
}
