// region:    --- Imports
use thiserror::Error;
use tracing::info;

// endregion: --- Imports

/// 기본 테스트 대상 서비스 주소
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

/// 주소를 덮어쓰는 환경 변수
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url must start with http:// or https://: {0}")]
    InvalidScheme(String),
    #[error("base url is empty")]
    Empty,
}

// region:    --- Api Config
/// 테스트 대상 API 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// 주소 검증 후 설정 생성 (끝의 '/' 제거)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Empty);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidScheme(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// 환경 변수에서 설정 로드, 없으면 기본 주소 사용
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => {
                info!("{:<12} --> {} 사용: {}", "Config", BASE_URL_ENV, url);
                Self::new(url)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// endregion: --- Api Config
