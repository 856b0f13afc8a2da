/// 상품 생성
pub const CREATE_ITEM: &str = "/api/1/item";

/// 상품 조회
pub fn item(item_id: &str) -> String {
    format!("/api/1/item/{}", item_id)
}

/// 판매자 상품 목록 조회
pub fn seller_items(seller_id: &str) -> String {
    format!("/api/1/{}/item", seller_id)
}

/// 상품 통계 조회
pub fn statistic(item_id: &str) -> String {
    format!("/api/1/statistic/{}", item_id)
}
