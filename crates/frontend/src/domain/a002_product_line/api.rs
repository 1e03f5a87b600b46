use contracts::domain::a002_product_line::{ProductLine, ProductLineDto};

use crate::shared::api_utils;

pub async fn fetch_lines() -> Result<Vec<ProductLine>, String> {
    api_utils::get_json("/lineas").await
}

/// Create a product line. Returns the created aggregate so pickers can
/// select it right away.
pub async fn create_line(dto: &ProductLineDto) -> Result<ProductLine, String> {
    api_utils::post_json("/lineas", dto).await
}
