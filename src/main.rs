// region:    --- Imports
use avito_api_tests::client::ApiClient;
use avito_api_tests::config::ApiConfig;
use avito_api_tests::suite::{Outcome, Suite};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };
    info!("{:<12} --> 테스트 대상: {}", "Main", config.base_url());

    // 순차 실행
    let mut suite = Suite::new(ApiClient::new(&config));
    let report = suite.run_all().await;

    info!(
        "{:<12} --> 결과: 성공 {}, 실패 {} (전체 {})",
        "Main",
        report.passed(),
        report.failed(),
        report.results.len()
    );
    for (name, outcome) in &report.results {
        if *outcome != Outcome::Passed {
            println!("{} ... {}", name, outcome);
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
// endregion: --- Main
