pub mod a001_brand;
pub mod a002_product_line;
pub mod a003_supplier;
pub mod a004_product;
pub mod a005_sale;
