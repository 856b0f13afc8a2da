//! 실제 서비스 대상 통합 테스트
//! 네트워크가 필요하므로 기본 제외: `cargo test -- --ignored`
use avito_api_tests::client::ApiClient;
use avito_api_tests::config::ApiConfig;
use avito_api_tests::item::model::{ITEM_KEYS, STATISTICS_KEYS};
use avito_api_tests::suite::{cases, checks, fixture, Suite};
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Once;
use tracing::info;
use uuid::Uuid;

static TRACING: Once = Once::new();

/// 트레이싱 초기화
fn init_tracing() {
    TRACING.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .without_time()
            .with_target(false)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).expect("트레이싱 구독자 설정 실패");
    });
}

/// 클라이언트 설정
fn setup() -> ApiClient {
    init_tracing();
    let config = ApiConfig::from_env().expect("API_BASE_URL 설정 오류");
    ApiClient::new(&config)
}

// region:    --- 1. 상품 생성

/// 상품 생성 테이블 테스트
#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_create_item() {
    let client = setup();

    // 케이스별 결과를 모두 수집한 뒤 한 번에 검증
    let mut mismatches = Vec::new();
    for case in cases::create_item_cases() {
        match client.create_item(&case.payload).await {
            Ok(response) if response.status == case.expected => {
                info!("{} ... ok", case.name);
            }
            Ok(response) => mismatches.push(format!(
                "{}: expected {}, got {}",
                case.name, case.expected, response.status
            )),
            Err(e) => mismatches.push(format!("{}: {}", case.name, e)),
        }
    }

    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}

// endregion: --- 1. 상품 생성

// region:    --- 2. 상품 조회

/// 생성한 상품 조회
#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_item_valid_id() {
    let client = setup();
    let item_id = fixture::create_fixture_item(&client)
        .await
        .expect("픽스처 생성 실패");

    let response = client.get_item(&item_id).await.expect("Failed to send request");
    assert_eq!(response.status, StatusCode::OK);

    // 응답 구조 확인
    let data = checks::first_object(&response.body).unwrap();
    checks::require_keys(data, &ITEM_KEYS).unwrap();

    // UUID 형식 확인
    let id = checks::require_str(data, "id").unwrap();
    if let Err(e) = checks::require_uuid_v4(id) {
        panic!("Invalid UUID format: {}", e);
    }
    assert_eq!(id, item_id);

    // 날짜 형식 확인
    if let Err(e) = checks::require_iso8601(checks::require_str(data, "createdAt").unwrap()) {
        panic!("Invalid date format: {}", e);
    }
}

#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_item_invalid_id() {
    let client = setup();
    let response = client
        .get_item("invalid_id")
        .await
        .expect("Failed to send request");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// endregion: --- 2. 상품 조회

// region:    --- 3. 판매자 상품 목록

#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_seller_items_valid() {
    let client = setup();
    let response = client
        .get_seller_items("222222")
        .await
        .expect("Failed to send request");
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
}

#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_seller_items_empty() {
    let client = setup();
    let response = client
        .get_seller_items("111111")
        .await
        .expect("Failed to send request");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_seller_items_invalid() {
    let client = setup();
    let response = client
        .get_seller_items("abc")
        .await
        .expect("Failed to send request");
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// endregion: --- 3. 판매자 상품 목록

// region:    --- 4. 통계

#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_statistics_valid() {
    let client = setup();
    let item_id = fixture::create_fixture_item(&client)
        .await
        .expect("픽스처 생성 실패");

    let response = client
        .get_statistic(&item_id)
        .await
        .expect("Failed to send request");
    assert_eq!(response.status, StatusCode::OK);

    let stats = checks::first_object(&response.body).unwrap();
    checks::require_keys(stats, &STATISTICS_KEYS).unwrap();
}

#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_get_statistics_invalid() {
    let client = setup();
    let random_uuid = Uuid::new_v4();
    let response = client
        .get_statistic(&random_uuid.to_string())
        .await
        .expect("Failed to send request");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// endregion: --- 4. 통계

/// 전체 스위트 순차 실행 (바이너리와 동일)
#[tokio::test]
#[ignore = "requires network access to the live service"]
async fn test_full_suite() {
    let client = setup();
    let mut suite = Suite::new(client);
    let report = suite.run_all().await;

    info!(
        "전체 {}건 중 성공 {}건",
        report.results.len(),
        report.passed()
    );
    for (name, outcome) in &report.results {
        info!("{} ... {}", name, outcome);
    }
    assert!(report.is_success(), "{:?}", report.results);
}
