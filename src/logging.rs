//! 로그 초기화

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// tracing 구독자를 설치한다
///
/// RUST_LOG가 있으면 그 설정을, 없으면 이 크레이트들만 `level`로 출력한다.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},cost_ledger_common={}",
            env!("CARGO_CRATE_NAME"),
            level,
            level
        )),
    };

    // 테스트 등에서 두 번 호출되어도 무시
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
