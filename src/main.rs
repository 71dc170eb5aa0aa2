use anyhow::Context;
use clap::Parser;
use cost_ledger::{cli, config, export, logging, pipeline, scanner, summary};
use cli::{Cli, Commands};
use config::Config;
use cost_ledger::common::TagStage;
use pipeline::Pipeline;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO });

    let config = Config::load()?;

    match cli.command {
        Commands::Parse { input, output, format, no_tag, title } => {
            println!("📒 cost-ledger - 정산서 파싱\n");

            let tables = config.load_tables()?;
            let pipeline = Pipeline::from_tables(&tables);

            println!("[1/3] 엑셀 파일 확인 중...");
            let inputs = scanner::resolve_inputs(&input)?;
            println!("✔ {}개 파일\n", inputs.len());

            println!("[2/3] 시트 파싱 중...{}", if no_tag { "" } else { " (위치 태깅 포함)" });
            let result = pipeline
                .run_files(&inputs, !no_tag)
                .with_context(|| format!("파싱 실패: {}", input.display()))?;
            println!(
                "✔ 공사 {}건, 레코드 {}건",
                result.projects.len(),
                result.dataset.records.len()
            );
            if let Some(stats) = &result.tag_stats {
                println!("✔ 위치 태그 {}건 / {}건", stats.tagged(), stats.records);
            }
            println!();

            println!("[3/3] 결과 저장 중...");
            let format = format.unwrap_or(config.default_format);
            let output_dir = output
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let written = export::export_dataset(&result.dataset, format, &output_dir, &title)?;
            for path in written {
                println!("✔ 저장: {}", path.display());
            }

            println!("\n✅ 완료");
        }

        Commands::Tag { input, output } => {
            println!("🏷 cost-ledger - 위치 태깅\n");

            let tables = config.load_tables()?;
            let mut dataset = export::read_json(&input)
                .with_context(|| format!("데이터셋 읽기 실패: {}", input.display()))?;

            let stats = TagStage::from_tables(&tables).tag(&mut dataset);
            println!(
                "✔ 항목명 {}건, 비고 {}건, 미태깅 {}건, 기본명 {}건",
                stats.tagged_by_name, stats.tagged_by_notes, stats.untagged, stats.base_names
            );

            let output_path = output.unwrap_or(input);
            export::write_json(&dataset, &output_path)?;
            println!("✔ 저장: {}", output_path.display());
        }

        Commands::Stats { input } => {
            let tables = config.load_tables()?;
            let pipeline = Pipeline::from_tables(&tables);
            let inputs = scanner::resolve_inputs(&input)?;
            let result = pipeline.run_files(&inputs, true)?;

            summary::print_summary(&summary::summarize(&result.dataset));
        }

        Commands::Config { set_dictionary, clear_dictionary, show } => {
            let mut config = config;

            if let Some(path) = set_dictionary {
                // 저장 전에 읽을 수 있는지 확인
                cost_ledger::common::ClassifierTables::from_file(&path)
                    .with_context(|| format!("분류표를 읽을 수 없습니다: {}", path.display()))?;
                config.set_dictionary(Some(path))?;
                println!("✔ 분류표를 설정했습니다");
            } else if clear_dictionary {
                config.set_dictionary(None)?;
                println!("✔ 내장 분류표를 사용합니다");
            }

            if show {
                println!("설정:");
                println!(
                    "  분류표: {}",
                    config
                        .dictionary_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "내장".into())
                );
                println!(
                    "  출력 폴더: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| ".".into())
                );
                println!("  출력 형식: {}", config.default_format);
            }
        }
    }

    Ok(())
}
