use contracts::domain::a005_sale::{
    CreateSaleRequest, Sale, SaleHistoryEntry, SaleId, UpdateSaleLinesRequest,
};

use crate::shared::api_utils;

/// Sales register, active and cancelled alike.
pub async fn fetch_sales() -> Result<Vec<Sale>, String> {
    api_utils::get_json("/venta/con-borradas").await
}

pub async fn fetch_sale(id: SaleId) -> Result<Sale, String> {
    api_utils::get_json(&format!("/venta/{}", id.value())).await
}

/// Record a new sale. The backend performs the authoritative stock check
/// and pricing; a rejection carries its human-readable reason.
pub async fn create_sale(request: &CreateSaleRequest) -> Result<(), String> {
    api_utils::post_json_no_content("/venta", request).await
}

/// Replace the lines of an existing sale. The reason is recorded in the
/// sale's change history.
pub async fn update_sale_lines(id: SaleId, request: &UpdateSaleLinesRequest) -> Result<(), String> {
    api_utils::patch_json_no_content(&format!("/venta/{}/detalles", id.value()), request).await
}

/// Soft-delete (cancel) a sale. Stock is not adjusted.
pub async fn cancel_sale(id: SaleId) -> Result<(), String> {
    api_utils::delete_no_content(&format!("/venta/{}", id.value())).await
}

/// Restore a cancelled sale. Stock is not adjusted.
pub async fn restore_sale(id: SaleId) -> Result<(), String> {
    api_utils::post_no_content(&format!("/venta/{}/restore", id.value())).await
}

pub async fn fetch_history(id: SaleId) -> Result<Vec<SaleHistoryEntry>, String> {
    api_utils::get_json(&format!("/venta/{}/historial", id.value())).await
}
