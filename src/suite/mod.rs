/// API 테스트 스위트
/// 1. 상품 생성
/// 2. 상품 조회
/// 3. 판매자 상품 목록
/// 4. 통계
// region:    --- Imports
use crate::client::{ApiClient, ClientError};
use crate::item::model::{Item, Statistics, ITEM_KEYS, STATISTICS_KEYS};
use cases::CreateItemCase;
use checks::CheckError;
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Modules
pub mod cases;
pub mod checks;
pub mod fixture;

// endregion: --- Modules

/// 상품이 있는 판매자
pub const SELLER_WITH_ITEMS: &str = "222222";
/// 상품이 없는 판매자
pub const SELLER_WITHOUT_ITEMS: &str = "111111";
pub const INVALID_SELLER_ID: &str = "abc";
pub const INVALID_ITEM_ID: &str = "invalid_id";

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error("fixture item creation failed: {0}")]
    SetupFailed(String),
    /// 이전 픽스처 생성 요청의 네트워크 오류 재사용
    #[error("{0}")]
    FixtureUnreachable(String),
}

// region:    --- Outcome & Report
/// 개별 테스트 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// 검증 실패 (상태 코드, 필드, 형식, 픽스처)
    Failed(String),
    /// 네트워크 오류로 중단
    Errored(String),
}

impl From<Result<(), SuiteError>> for Outcome {
    fn from(result: Result<(), SuiteError>) -> Self {
        match result {
            Ok(()) => Outcome::Passed,
            Err(e @ (SuiteError::Client(_) | SuiteError::FixtureUnreachable(_))) => {
                Outcome::Errored(e.to_string())
            }
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "PASSED"),
            Outcome::Failed(reason) => write!(f, "FAILED: {}", reason),
            Outcome::Errored(reason) => write!(f, "ERROR: {}", reason),
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<(String, Outcome)>,
}

impl Report {
    pub fn record(&mut self, name: impl Into<String>, outcome: Outcome) {
        let name = name.into();
        match &outcome {
            Outcome::Passed => info!("{:<12} --> {} ... {}", "Suite", name, outcome),
            Outcome::Failed(_) => warn!("{:<12} --> {} ... {}", "Suite", name, outcome),
            Outcome::Errored(_) => error!("{:<12} --> {} ... {}", "Suite", name, outcome),
        }
        self.results.push((name, outcome));
    }

    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| *outcome == Outcome::Passed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

// endregion: --- Outcome & Report

// region:    --- Suite
/// 픽스처 생성 결과 (최초 요청 시 한 번만 생성)
#[derive(Debug, Clone)]
enum FixtureState {
    Ready(String),
    SetupFailed(String),
    Unreachable(String),
}

impl FixtureState {
    fn replay(&self) -> Result<String, SuiteError> {
        match self {
            FixtureState::Ready(id) => Ok(id.clone()),
            FixtureState::SetupFailed(reason) => Err(SuiteError::SetupFailed(reason.clone())),
            FixtureState::Unreachable(reason) => {
                Err(SuiteError::FixtureUnreachable(reason.clone()))
            }
        }
    }
}

pub struct Suite {
    client: ApiClient,
    fixture: Option<FixtureState>,
}

impl Suite {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            fixture: None,
        }
    }

    /// 전체 테스트 순차 실행
    pub async fn run_all(&mut self) -> Report {
        let mut report = Report::default();

        for case in cases::create_item_cases() {
            let outcome = self.create_item(&case).await.into();
            report.record(format!("test_create_item[{}]", case.name), outcome);
        }

        let outcome = self.get_item_valid_id().await.into();
        report.record("test_get_item_valid_id", outcome);
        let outcome = self.get_item_invalid_id().await.into();
        report.record("test_get_item_invalid_id", outcome);

        let outcome = self.seller_items_valid().await.into();
        report.record("test_get_seller_items_valid", outcome);
        let outcome = self.seller_items_empty().await.into();
        report.record("test_get_seller_items_empty", outcome);
        let outcome = self.seller_items_invalid().await.into();
        report.record("test_get_seller_items_invalid", outcome);

        let outcome = self.statistics_valid().await.into();
        report.record("test_get_statistics_valid", outcome);
        let outcome = self.statistics_unknown_id().await.into();
        report.record("test_get_statistics_invalid", outcome);

        report
    }

    /// 픽스처 상품 id
    pub async fn fixture_id(&mut self) -> Result<String, SuiteError> {
        if let Some(state) = &self.fixture {
            return state.replay();
        }
        let result = fixture::create_fixture_item(&self.client).await;
        self.fixture = Some(match &result {
            Ok(id) => FixtureState::Ready(id.clone()),
            Err(e @ (SuiteError::Client(_) | SuiteError::FixtureUnreachable(_))) => {
                FixtureState::Unreachable(e.to_string())
            }
            Err(SuiteError::SetupFailed(reason)) => FixtureState::SetupFailed(reason.clone()),
            Err(e) => FixtureState::SetupFailed(e.to_string()),
        });
        result
    }

    // -- 1. 상품 생성

    pub async fn create_item(&self, case: &CreateItemCase) -> Result<(), SuiteError> {
        let resp = self.client.create_item(&case.payload).await?;
        checks::require_status(&resp, case.expected)?;
        Ok(())
    }

    // -- 2. 상품 조회

    pub async fn get_item_valid_id(&mut self) -> Result<(), SuiteError> {
        let item_id = self.fixture_id().await?;
        let resp = self.client.get_item(&item_id).await?;
        checks::require_status(&resp, StatusCode::OK)?;

        let data = checks::first_object(&resp.body)?;
        checks::require_keys(data, &ITEM_KEYS)?;
        let id = checks::require_str(data, "id")?;
        checks::require_uuid_v4(id)?;
        checks::require_iso8601(checks::require_str(data, "createdAt")?)?;
        if id != item_id {
            return Err(CheckError::IdMismatch {
                expected: item_id,
                actual: id.to_string(),
            }
            .into());
        }

        if let Ok(item) = serde_json::from_value::<Item>(resp.body[0].clone()) {
            info!(
                "{:<12} --> 상품 확인: seller={} name={} price={}",
                "Suite", item.seller_id, item.name, item.price
            );
        }
        Ok(())
    }

    pub async fn get_item_invalid_id(&self) -> Result<(), SuiteError> {
        let resp = self.client.get_item(INVALID_ITEM_ID).await?;
        checks::require_status(&resp, StatusCode::NOT_FOUND)?;
        Ok(())
    }

    // -- 3. 판매자 상품 목록

    pub async fn seller_items_valid(&self) -> Result<(), SuiteError> {
        let resp = self.client.get_seller_items(SELLER_WITH_ITEMS).await?;
        checks::require_status(&resp, StatusCode::OK)?;
        checks::require_list(&resp.body)?;
        Ok(())
    }

    pub async fn seller_items_empty(&self) -> Result<(), SuiteError> {
        let resp = self.client.get_seller_items(SELLER_WITHOUT_ITEMS).await?;
        checks::require_status(&resp, StatusCode::OK)?;
        checks::require_empty_list(&resp.body)?;
        Ok(())
    }

    pub async fn seller_items_invalid(&self) -> Result<(), SuiteError> {
        let resp = self.client.get_seller_items(INVALID_SELLER_ID).await?;
        checks::require_status(&resp, StatusCode::BAD_REQUEST)?;
        Ok(())
    }

    // -- 4. 통계

    pub async fn statistics_valid(&mut self) -> Result<(), SuiteError> {
        let item_id = self.fixture_id().await?;
        let resp = self.client.get_statistic(&item_id).await?;
        checks::require_status(&resp, StatusCode::OK)?;

        let stats = checks::first_object(&resp.body)?;
        checks::require_keys(stats, &STATISTICS_KEYS)?;

        if let Ok(stats) = serde_json::from_value::<Statistics>(resp.body[0].clone()) {
            info!(
                "{:<12} --> 통계 확인: likes={} views={} contacts={}",
                "Suite", stats.likes, stats.view_count, stats.contacts
            );
        }
        Ok(())
    }

    pub async fn statistics_unknown_id(&self) -> Result<(), SuiteError> {
        let random_id = Uuid::new_v4().to_string();
        let resp = self.client.get_statistic(&random_id).await?;
        checks::require_status(&resp, StatusCode::NOT_FOUND)?;
        Ok(())
    }
}

// endregion: --- Suite
