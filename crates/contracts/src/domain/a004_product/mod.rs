pub mod aggregate;

pub use aggregate::{AssignSuppliersRequest, Product, ProductDto, ProductId, SupplierLink};
