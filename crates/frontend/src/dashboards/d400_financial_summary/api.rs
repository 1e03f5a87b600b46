use contracts::dashboards::d400_financial_summary::{
    DateRange, FinancialSummary, MonthlySalesPoint, SellerPerformanceRow, TopProductRow,
    TopSaleInfo,
};

use crate::shared::api_utils;

/// Income, costs and estimated profit over the range.
pub async fn get_financial_summary(range: &DateRange) -> Result<FinancialSummary, String> {
    api_utils::get_json(&format!(
        "/dashboard/resumen-financiero?{}",
        range.to_query()
    ))
    .await
}

/// Sales totals grouped by month.
pub async fn get_monthly_sales(range: &DateRange) -> Result<Vec<MonthlySalesPoint>, String> {
    api_utils::get_json(&format!("/dashboard/ventas-mensuales?{}", range.to_query())).await
}

/// Top 10 products by units sold.
pub async fn get_top_products(range: &DateRange) -> Result<Vec<TopProductRow>, String> {
    api_utils::get_json(&format!(
        "/dashboard/productos-mas-vendidos?{}",
        range.to_query()
    ))
    .await
}

/// Totals and sale counts per seller.
pub async fn get_sales_by_seller(range: &DateRange) -> Result<Vec<SellerPerformanceRow>, String> {
    api_utils::get_json(&format!(
        "/dashboard/ventas-por-vendedor?{}",
        range.to_query()
    ))
    .await
}

/// The highest-value sale in the range, when one exists.
pub async fn get_top_sale(range: &DateRange) -> Result<Option<TopSaleInfo>, String> {
    api_utils::get_json(&format!("/dashboard/venta-mas-cara?{}", range.to_query())).await
}
