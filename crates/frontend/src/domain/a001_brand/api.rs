use contracts::domain::a001_brand::{Brand, BrandDto};

use crate::shared::api_utils;

pub async fn fetch_brands() -> Result<Vec<Brand>, String> {
    api_utils::get_json("/marcas").await
}

/// Create a brand. Returns the created aggregate so pickers can select it
/// right away.
pub async fn create_brand(dto: &BrandDto) -> Result<Brand, String> {
    api_utils::post_json("/marcas", dto).await
}
