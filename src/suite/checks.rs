//! 응답 검증 헬퍼
//!
//! 모든 헬퍼는 패닉 대신 `CheckError`를 반환한다. 러너는 이를 테스트 실패로 기록하고
//! 통합 테스트는 그대로 `assert`/`unwrap`으로 사용한다.

// region:    --- Imports
use crate::client::ApiResponse;
use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::{Uuid, Version};

// endregion: --- Imports

#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("expected status {expected}, got {actual}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("expected a JSON list, got {0}")]
    NotAList(String),
    #[error("expected a non-empty list")]
    EmptyList,
    #[error("expected an empty list, got {0} element(s)")]
    NonEmptyList(usize),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(String),
    #[error("missing keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
    #[error("field '{0}' is not a string")]
    NotAString(String),
    #[error("invalid UUID format: {0}")]
    InvalidUuid(String),
    #[error("invalid date format: {0}")]
    InvalidDate(String),
    #[error("id mismatch: expected {expected}, got {actual}")]
    IdMismatch { expected: String, actual: String },
}

/// 에러 메시지용 짧은 값 요약
fn summarize(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > 80 {
        let head: String = text.chars().take(80).collect();
        format!("{}...", head)
    } else {
        text
    }
}

// region:    --- Status
pub fn require_status(resp: &ApiResponse, expected: StatusCode) -> Result<(), CheckError> {
    if resp.status == expected {
        Ok(())
    } else {
        Err(CheckError::UnexpectedStatus {
            expected,
            actual: resp.status,
        })
    }
}

// endregion: --- Status

// region:    --- Shape
pub fn require_list(body: &Value) -> Result<&Vec<Value>, CheckError> {
    body.as_array()
        .ok_or_else(|| CheckError::NotAList(summarize(body)))
}

pub fn require_empty_list(body: &Value) -> Result<(), CheckError> {
    match require_list(body)?.len() {
        0 => Ok(()),
        n => Err(CheckError::NonEmptyList(n)),
    }
}

/// 목록의 첫 번째 요소를 객체로 반환
pub fn first_object(body: &Value) -> Result<&Map<String, Value>, CheckError> {
    let first = require_list(body)?.first().ok_or(CheckError::EmptyList)?;
    first
        .as_object()
        .ok_or_else(|| CheckError::NotAnObject(summarize(first)))
}

pub fn require_keys(obj: &Map<String, Value>, keys: &[&str]) -> Result<(), CheckError> {
    let missing: Vec<String> = keys
        .iter()
        .filter(|key| !obj.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CheckError::MissingKeys(missing))
    }
}

pub fn require_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str, CheckError> {
    match obj.get(key) {
        Some(value) => value
            .as_str()
            .ok_or_else(|| CheckError::NotAString(key.to_string())),
        None => Err(CheckError::MissingKeys(vec![key.to_string()])),
    }
}

// endregion: --- Shape

// region:    --- Formats
/// UUID 파싱 및 버전 4 확인
pub fn require_uuid_v4(raw: &str) -> Result<Uuid, CheckError> {
    let id = Uuid::parse_str(raw).map_err(|_| CheckError::InvalidUuid(raw.to_string()))?;
    match id.get_version() {
        Some(Version::Random) => Ok(id),
        _ => Err(CheckError::InvalidUuid(raw.to_string())),
    }
}

/// ISO-8601 날짜/시간 확인
/// 확장/기본 형식 날짜, 시(`HH`)부터 소수 초까지의 시간, `Z` 또는 `±HH[:MM]` 오프셋 허용
pub fn require_iso8601(raw: &str) -> Result<(), CheckError> {
    let raw = raw.trim();
    if parse_iso8601(raw).is_some() {
        Ok(())
    } else {
        Err(CheckError::InvalidDate(raw.to_string()))
    }
}

fn parse_iso8601(raw: &str) -> Option<()> {
    let (date, time) = match raw.find(|c| c == 'T' || c == ' ') {
        Some(pos) => (&raw[..pos], Some(&raw[pos + 1..])),
        None => (raw, None),
    };
    parse_date(date)?;
    match time {
        Some(time) => parse_time(time),
        None => Some(()),
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        let year = date[..4].parse().ok()?;
        let month = date[4..6].parse().ok()?;
        let day = date[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn parse_time(time: &str) -> Option<()> {
    let (clock, offset) = match time.strip_suffix('Z') {
        Some(clock) => (clock, None),
        None => match time.rfind(|c| c == '+' || c == '-') {
            Some(pos) => (&time[..pos], Some(&time[pos + 1..])),
            None => (time, None),
        },
    };
    if let Some(offset) = offset {
        parse_offset(offset)?;
    }
    parse_clock(clock)
}

/// 부호를 뗀 오프셋: `HH`, `HHMM`, `HH:MM`
fn parse_offset(offset: &str) -> Option<()> {
    let digits = match offset.len() {
        2 | 4 => offset.to_string(),
        5 if offset.as_bytes()[2] == b':' => offset.replacen(':', "", 1),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = digits[..2].parse().ok()?;
    let minutes: u32 = match digits.len() {
        4 => digits[2..].parse().ok()?,
        _ => 0,
    };
    (hours < 24 && minutes < 60).then_some(())
}

fn parse_clock(clock: &str) -> Option<()> {
    const CLOCK_FORMATS: [&str; 4] = ["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"];

    // 시만 있는 경우 분 보충
    let clock = if clock.len() == 2 && clock.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:00", clock)
    } else {
        clock.to_string()
    };
    CLOCK_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(&clock, fmt).is_ok())
        .then_some(())
}

// endregion: --- Formats
