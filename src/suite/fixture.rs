// region:    --- Imports
use super::SuiteError;
use crate::client::ApiClient;
use crate::item::model::CreateItemRequest;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

// endregion: --- Imports

/// 픽스처 판매자 id
pub const FIXTURE_SELLER_ID: i64 = 222222;

/// 픽스처 상품 생성 요청
pub fn fixture_request() -> CreateItemRequest {
    CreateItemRequest {
        seller_id: FIXTURE_SELLER_ID,
        name: "Test Item".to_string(),
        price: 1000,
    }
}

/// 생성 응답에서 상품 id 추출
/// `id` 필드가 없으면 `status` 메시지 끝의 UUID 사용 ("Сохранили объявление - <uuid>")
pub fn extract_item_id(body: &Value) -> Option<String> {
    if let Some(id) = body.get("id").and_then(Value::as_str) {
        return Some(id.to_string());
    }
    let status = body.get("status").and_then(Value::as_str)?;
    let last = status.split_whitespace().last()?;
    Uuid::parse_str(last).ok().map(|id| id.to_string())
}

/// 픽스처 상품 생성 후 id 반환
pub async fn create_fixture_item(client: &ApiClient) -> Result<String, SuiteError> {
    let resp = client.create_item(&fixture_request()).await?;

    if resp.status != StatusCode::OK {
        error!(
            "{:<12} --> 픽스처 상품 생성 실패: {} {}",
            "Fixture", resp.status, resp.body
        );
        return Err(SuiteError::SetupFailed(format!(
            "status {}, body {}",
            resp.status, resp.body
        )));
    }

    match extract_item_id(&resp.body) {
        Some(id) => {
            info!("{:<12} --> 픽스처 상품 생성: {}", "Fixture", id);
            Ok(id)
        }
        None => Err(SuiteError::SetupFailed(format!(
            "no item id in response body {}",
            resp.body
        ))),
    }
}
