// region:    --- Imports
use crate::config::ApiConfig;
use crate::item::endpoints;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

// endregion: --- Imports

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{method} {path} 요청 실패: {source}")]
    Request {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

// region:    --- Api Response
/// 상태 코드와 JSON 본문
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// JSON이 아닌 본문은 문자열 값으로 보관
    pub fn from_text(status: StatusCode, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        Self { status, body }
    }
}

// endregion: --- Api Response

// region:    --- Api Client
/// 광고 서비스 API 클라이언트
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 상품 생성 (잘못된 페이로드도 그대로 전송)
    pub async fn create_item<T>(&self, payload: &T) -> Result<ApiResponse, ClientError>
    where
        T: Serialize + ?Sized,
    {
        self.send(Method::POST, endpoints::CREATE_ITEM.to_string(), Some(payload))
            .await
    }

    /// 상품 조회
    pub async fn get_item(&self, item_id: &str) -> Result<ApiResponse, ClientError> {
        self.send::<Value>(Method::GET, endpoints::item(item_id), None)
            .await
    }

    /// 판매자 상품 목록 조회
    pub async fn get_seller_items(&self, seller_id: &str) -> Result<ApiResponse, ClientError> {
        self.send::<Value>(Method::GET, endpoints::seller_items(seller_id), None)
            .await
    }

    /// 상품 통계 조회
    pub async fn get_statistic(&self, item_id: &str) -> Result<ApiResponse, ClientError> {
        self.send::<Value>(Method::GET, endpoints::statistic(item_id), None)
            .await
    }

    async fn send<T>(
        &self,
        method: Method,
        path: String,
        payload: Option<&T>,
    ) -> Result<ApiResponse, ClientError>
    where
        T: Serialize + ?Sized,
    {
        info!("{:<12} --> {} {}", "Client", method, path);
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let wrap = |source: reqwest::Error| ClientError::Request {
            method: method.clone(),
            path: path.clone(),
            source,
        };
        let response = request.send().await.map_err(wrap)?;
        let status = response.status();
        let text = response.text().await.map_err(wrap)?;

        debug!("{:<12} --> {} 응답 본문: {}", "Client", status, text);
        Ok(ApiResponse::from_text(status, &text))
    }
}

// endregion: --- Api Client
