use contracts::domain::a003_supplier::{Supplier, SupplierDto};

use crate::shared::api_utils;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    api_utils::get_json("/proveedores").await
}

pub async fn create_supplier(dto: &SupplierDto) -> Result<Supplier, String> {
    api_utils::post_json("/proveedores", dto).await
}
