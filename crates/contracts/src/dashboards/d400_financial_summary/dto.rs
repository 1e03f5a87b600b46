use crate::shared::lenient;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/resumen-financiero`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FinancialSummary {
    #[serde(rename = "ingresos", deserialize_with = "lenient::f64_lenient")]
    pub income: f64,

    #[serde(rename = "costos", deserialize_with = "lenient::f64_lenient")]
    pub costs: f64,

    #[serde(rename = "ganancias", deserialize_with = "lenient::f64_lenient")]
    pub profit: f64,
}

/// One point of `GET /dashboard/ventas-mensuales`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySalesPoint {
    /// Period label in format "YYYY-MM"
    #[serde(rename = "mes")]
    pub month: String,

    #[serde(rename = "totalVentas", deserialize_with = "lenient::f64_lenient")]
    pub total: f64,
}

/// One row of `GET /dashboard/productos-mas-vendidos` (top 10 by units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProductRow {
    #[serde(rename = "nombreProducto")]
    pub product_name: String,

    #[serde(rename = "totalVendido", deserialize_with = "lenient::i32_lenient")]
    pub units_sold: i32,
}

/// One row of `GET /dashboard/ventas-por-vendedor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerPerformanceRow {
    #[serde(rename = "vendedor")]
    pub seller: String,

    #[serde(rename = "totalVendido", deserialize_with = "lenient::f64_lenient")]
    pub total_sold: f64,

    #[serde(rename = "cantidadVentas", deserialize_with = "lenient::i32_lenient")]
    pub sale_count: i32,
}

/// Response of `GET /dashboard/venta-mas-cara` (highest-value sale in range).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSaleInfo {
    #[serde(rename = "idVenta")]
    pub sale_id: i32,

    #[serde(rename = "fecha")]
    pub date: chrono::DateTime<chrono::Utc>,

    #[serde(deserialize_with = "lenient::f64_lenient")]
    pub total: f64,

    #[serde(rename = "vendedor")]
    pub seller: String,
}

/// Inclusive date range for all dashboard queries.
///
/// Quick-range constructors take `today` as a parameter: the frontend reads
/// the clock from `js_sys::Date`, and tests pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of the current month through today.
    pub fn this_month(today: NaiveDate) -> Self {
        let start = today.with_day(1).expect("day 1 always exists");
        Self { start, end: today }
    }

    /// The whole previous calendar month.
    pub fn last_month(today: NaiveDate) -> Self {
        let first_of_current = today.with_day(1).expect("day 1 always exists");
        let end = first_of_current.pred_opt().expect("no month before MIN date");
        let start = end.with_day(1).expect("day 1 always exists");
        Self { start, end }
    }

    /// January 1st of the current year through today.
    pub fn this_year(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Jan 1 always exists");
        Self { start, end: today }
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Query-string fragment expected by the dashboard endpoints: the start
    /// at midnight, the end at the last instant of its day.
    pub fn to_query(&self) -> String {
        format!(
            "startDate={}T00:00:00.000Z&endDate={}T23:59:59.999Z",
            self.start, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quick_ranges() {
        let today = date(2025, 3, 15);

        let range = DateRange::this_month(today);
        assert_eq!(range.start, date(2025, 3, 1));
        assert_eq!(range.end, today);

        let range = DateRange::last_month(today);
        assert_eq!(range.start, date(2025, 2, 1));
        assert_eq!(range.end, date(2025, 2, 28));

        let range = DateRange::this_year(today);
        assert_eq!(range.start, date(2025, 1, 1));
        assert_eq!(range.end, today);
    }

    #[test]
    fn last_month_crosses_year_boundary() {
        let range = DateRange::last_month(date(2025, 1, 10));
        assert_eq!(range.start, date(2024, 12, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }

    #[test]
    fn query_string_covers_the_whole_end_day() {
        let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 15));
        assert_eq!(
            range.to_query(),
            "startDate=2025-03-01T00:00:00.000Z&endDate=2025-03-15T23:59:59.999Z"
        );
    }

    #[test]
    fn summary_accepts_string_amounts() {
        let summary: FinancialSummary = serde_json::from_str(
            r#"{"ingresos": "1500.50", "costos": 900, "ganancias": "600.50"}"#,
        )
        .unwrap();
        assert_eq!(summary.income, 1500.5);
        assert_eq!(summary.profit, 600.5);
    }
}
