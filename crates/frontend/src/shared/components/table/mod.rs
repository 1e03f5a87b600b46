pub mod number_format;

pub use number_format::{format_money, format_price};
