use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cost-ledger")]
#[command(about = "공사 정산 엑셀 → 비용 레코드 변환 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 엑셀(또는 엑셀이 들어 있는 폴더)을 파싱해 데이터셋을 출력
    Parse {
        /// 엑셀 파일 또는 폴더
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 파일/디렉터리 (기본: 설정의 output_dir 또는 현재 디렉터리)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 출력 형식 (json/excel/both)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 위치 태깅을 건너뜀
        #[arg(long)]
        no_tag: bool,

        /// 출력 파일 이름
        #[arg(short, long, default_value = "cost-records")]
        title: String,
    },

    /// 저장된 데이터셋 JSON의 위치 태그를 다시 계산
    Tag {
        /// 데이터셋 JSON
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 JSON (기본: 입력 파일 덮어쓰기)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 파싱 결과 통계 출력
    Stats {
        /// 엑셀 파일 또는 폴더
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 설정 관리
    Config {
        /// 사용자 분류표 JSON 지정
        #[arg(long)]
        set_dictionary: Option<PathBuf>,

        /// 사용자 분류표 해제
        #[arg(long)]
        clear_dictionary: bool,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
