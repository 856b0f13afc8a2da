use reqwest::StatusCode;
use serde_json::{json, Value};

/// 상품 생성 테스트 케이스
#[derive(Debug, Clone)]
pub struct CreateItemCase {
    pub name: &'static str,
    pub payload: Value,
    pub expected: StatusCode,
}

/// 상품 생성 테스트 테이블
pub fn create_item_cases() -> Vec<CreateItemCase> {
    vec![
        // 정상 케이스
        CreateItemCase {
            name: "valid_min_seller",
            payload: json!({"sellerID": 111111, "name": "Valid 1", "price": 100}),
            expected: StatusCode::OK,
        },
        CreateItemCase {
            name: "valid_max_seller",
            payload: json!({"sellerID": 999999, "name": "Valid 2", "price": 999}),
            expected: StatusCode::OK,
        },
        // 비정상 케이스
        CreateItemCase {
            name: "seller_out_of_range",
            payload: json!({"sellerID": 100000, "name": "Invalid", "price": 100}),
            expected: StatusCode::BAD_REQUEST,
        },
        CreateItemCase {
            name: "seller_not_numeric",
            payload: json!({"sellerID": "text", "name": "Invalid", "price": 100}),
            expected: StatusCode::BAD_REQUEST,
        },
        CreateItemCase {
            name: "missing_seller_id",
            payload: json!({"name": "No SellerID", "price": 100}),
            expected: StatusCode::BAD_REQUEST,
        },
        CreateItemCase {
            name: "missing_name",
            payload: json!({"sellerID": 123456, "price": 100}),
            expected: StatusCode::BAD_REQUEST,
        },
    ]
}
