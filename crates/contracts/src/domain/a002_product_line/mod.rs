pub mod aggregate;

pub use aggregate::{ProductLine, ProductLineDto, ProductLineId};
