pub mod dto;

pub use dto::{
    DateRange, FinancialSummary, MonthlySalesPoint, SellerPerformanceRow, TopProductRow,
    TopSaleInfo,
};
