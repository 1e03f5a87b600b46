pub mod aggregate;

pub use aggregate::{Brand, BrandDto, BrandId};
