use contracts::domain::a004_product::{
    AssignSuppliersRequest, Product, ProductDto, ProductId, SupplierLink,
};

use crate::shared::api_utils;

/// Catalog snapshot: id, name, price and current stock per product.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    api_utils::get_json("/productos").await
}

pub async fn fetch_product(id: ProductId) -> Result<Product, String> {
    api_utils::get_json(&format!("/productos/{}", id.value())).await
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, String> {
    api_utils::post_json("/productos", dto).await
}

pub async fn update_product(id: ProductId, dto: &ProductDto) -> Result<(), String> {
    api_utils::patch_json_no_content(&format!("/productos/{}", id.value()), dto).await
}

pub async fn fetch_product_suppliers(id: ProductId) -> Result<Vec<SupplierLink>, String> {
    api_utils::get_json(&format!("/productos/{}/proveedores", id.value())).await
}

pub async fn assign_suppliers(
    id: ProductId,
    request: &AssignSuppliersRequest,
) -> Result<(), String> {
    api_utils::put_json_no_content(&format!("/productos/{}/proveedores", id.value()), request).await
}
