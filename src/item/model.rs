use serde::{Deserialize, Serialize};

/// 상품 응답 필드
pub const ITEM_KEYS: [&str; 5] = ["id", "sellerId", "name", "price", "createdAt"];

/// 통계 응답 필드
pub const STATISTICS_KEYS: [&str; 3] = ["likes", "viewCount", "contacts"];

// 상품 모델 (서비스 응답)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub seller_id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
}

// 통계 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

/// 상품 생성 요청
/// 요청 필드명은 `sellerID`, 응답 필드명은 `sellerId`
#[derive(Debug, Clone, Serialize)]
pub struct CreateItemRequest {
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
}

/// 유효한 판매자 id 범위
pub fn is_valid_seller_id(seller_id: i64) -> bool {
    (111_111..=999_999).contains(&seller_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_upper_case_seller_field() {
        let req = CreateItemRequest {
            seller_id: 222222,
            name: "Test Item".to_string(),
            price: 1000,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"sellerID": 222222, "name": "Test Item", "price": 1000})
        );
        assert!(value.get("sellerId").is_none());
    }

    #[test]
    fn item_deserializes_from_service_shape() {
        let item: Item = serde_json::from_value(json!({
            "id": "0b6a3c1e-9a3f-4c1e-8e0d-2f7c5a1b9d42",
            "sellerId": 222222,
            "name": "Test Item",
            "price": 1000,
            "createdAt": "2024-08-30 13:08:07.390155 +0300 +0300"
        }))
        .unwrap();
        assert_eq!(item.seller_id, 222222);
        assert_eq!(item.price, 1000.0);
    }

    #[test]
    fn statistics_deserializes() {
        let stats: Statistics =
            serde_json::from_value(json!({"likes": 1, "viewCount": 20, "contacts": 3})).unwrap();
        assert_eq!(stats.view_count, 20);
    }

    #[test]
    fn seller_range_bounds() {
        assert!(is_valid_seller_id(111111));
        assert!(is_valid_seller_id(999999));
        assert!(!is_valid_seller_id(100000));
        assert!(!is_valid_seller_id(1_000_000));
    }
}
