pub mod aggregate;
pub mod cart;

pub use aggregate::{
    CreateSaleRequest, Sale, SaleAction, SaleHistoryEntry, SaleId, SaleLine, SaleLineDto,
    UpdateSaleLinesRequest,
};
pub use cart::{Cart, CartError, CartLine, StockWarning};
