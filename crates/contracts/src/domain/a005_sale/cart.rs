//! Sale-in-progress cart.
//!
//! The cart is the working set of line items for one sale, owned by a single
//! screen session. It knows nothing about the UI or the network: screens
//! mutate it through [`Cart::add_or_merge`] / [`Cart::remove`] and hand the
//! result of [`Cart::checkout`] to the sales API. Stock checks here are
//! advisory only; the backend re-validates against real stock when the sale
//! is submitted.

use super::aggregate::{CreateSaleRequest, SaleLine, SaleLineDto, UpdateSaleLinesRequest};
use crate::domain::a004_product::{Product, ProductId};
use std::fmt;

/// One line of the cart.
///
/// `unit_price` is captured when the line is first created and never re-read
/// from a refreshed catalog snapshot; `subtotal` is kept equal to
/// `quantity * unit_price` on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// Advisory notice that a requested quantity exceeds the last known stock
/// snapshot. Never blocks the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct StockWarning {
    pub product_name: String,
    pub requested: u32,
    pub available: i32,
}

impl fmt::Display for StockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stock insuficiente para \"{}\". Stock actual: {}",
            self.product_name, self.available
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// Submit refused locally: the cart has no lines.
    EmptyCart,
    /// Add refused locally: requested quantity is not positive.
    ZeroQuantity,
    /// Edit submit refused locally: the change reason is blank.
    MissingEditReason,
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CartError::EmptyCart => "La venta no tiene productos.",
            CartError::ZeroQuantity => "La cantidad debe ser mayor a cero.",
            CartError::MissingEditReason => {
                "Debes ingresar un motivo para la edición (requerido para el historial)."
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CartError {}

/// Ordered collection of cart lines; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the cart from an existing sale's recorded lines
    /// (edit flow). Lines whose embedded product reference has no id cannot
    /// be resubmitted and are skipped.
    pub fn from_sale_lines(lines: &[SaleLine]) -> Self {
        let lines = lines
            .iter()
            .filter_map(|line| {
                let id = line.product.id?;
                Some(CartLine {
                    product_id: ProductId::new(id),
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    subtotal: line.quantity as f64 * line.unit_price,
                })
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` units of `product`, merging into the existing line if
    /// the product is already in the cart.
    ///
    /// Returns an advisory [`StockWarning`] when the resulting quantity
    /// exceeds the product's last known stock; the merge is applied either
    /// way, because only the backend's stock check is authoritative.
    pub fn add_or_merge(
        &mut self,
        product: &Product,
        quantity: u32,
    ) -> Result<Option<StockWarning>, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let merged_quantity = match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => {
                // Price stays as captured at first add, even if the catalog
                // snapshot was refreshed since.
                line.quantity += quantity;
                line.subtotal = line.quantity as f64 * line.unit_price;
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    product_id: product.id,
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.unit_price,
                    subtotal: quantity as f64 * product.unit_price,
                });
                quantity
            }
        };

        if i64::from(merged_quantity) > i64::from(product.stock) {
            return Ok(Some(StockWarning {
                product_name: product.name.clone(),
                requested: merged_quantity,
                available: product.stock,
            }));
        }
        Ok(None)
    }

    /// Remove the line for `product_id`. Removing an absent product is a
    /// no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line subtotals, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.subtotal).sum()
    }

    fn line_dtos(&self) -> Vec<SaleLineDto> {
        self.lines
            .iter()
            .map(|l| SaleLineDto {
                product_id: l.product_id.value(),
                quantity: l.quantity,
            })
            .collect()
    }

    /// Build the new-sale submission payload. Fails locally (no network
    /// call should be made) when the cart is empty.
    pub fn checkout(&self) -> Result<CreateSaleRequest, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(CreateSaleRequest {
            lines: self.line_dtos(),
        })
    }

    /// Build the edit-sale submission payload. In addition to the empty-cart
    /// rule, a non-blank change reason is required.
    pub fn checkout_update(&self, reason: &str) -> Result<UpdateSaleLinesRequest, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }
        if reason.trim().is_empty() {
            return Err(CartError::MissingEditReason);
        }
        Ok(UpdateSaleLinesRequest {
            lines: self.line_dtos(),
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityRef;

    fn product(id: i32, name: &str, unit_price: f64, stock: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: None,
            unit_price,
            stock,
            image: None,
            brand: EntityRef::default(),
            line: EntityRef::default(),
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let widget = product(1, "Widget", 10.0, 100);

        cart.add_or_merge(&widget, 2).unwrap();
        cart.add_or_merge(&widget, 3).unwrap();
        cart.add_or_merge(&widget, 5).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 10);
        assert_eq!(cart.lines()[0].subtotal, 100.0);
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut cart = Cart::new();
        let widget = product(1, "Widget", 10.0, 100);
        let gadget = product(2, "Gadget", 2.5, 100);

        assert_eq!(cart.total(), 0.0);

        cart.add_or_merge(&widget, 2).unwrap();
        assert_eq!(cart.total(), 20.0);

        cart.add_or_merge(&gadget, 4).unwrap();
        assert_eq!(cart.total(), 30.0);

        cart.add_or_merge(&widget, 1).unwrap();
        assert_eq!(cart.total(), 40.0);

        cart.remove(ProductId::new(2));
        assert_eq!(cart.total(), 30.0);
    }

    #[test]
    fn removing_absent_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add_or_merge(&product(1, "Widget", 10.0, 5), 1).unwrap();

        let before = cart.clone();
        cart.remove(ProductId::new(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn zero_quantity_is_rejected_without_mutation() {
        let mut cart = Cart::new();
        let err = cart.add_or_merge(&product(1, "Widget", 10.0, 5), 0);
        assert_eq!(err, Err(CartError::ZeroQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn checkout_of_empty_cart_is_a_local_error() {
        let cart = Cart::new();
        assert_eq!(cart.checkout(), Err(CartError::EmptyCart));
        assert_eq!(cart.checkout_update("motivo"), Err(CartError::EmptyCart));
    }

    #[test]
    fn edit_checkout_requires_a_reason() {
        let mut cart = Cart::new();
        cart.add_or_merge(&product(1, "Widget", 10.0, 5), 1).unwrap();

        assert_eq!(cart.checkout_update(""), Err(CartError::MissingEditReason));
        assert_eq!(
            cart.checkout_update("   "),
            Err(CartError::MissingEditReason)
        );

        let req = cart.checkout_update("cliente cambió el pedido").unwrap();
        assert_eq!(req.reason, "cliente cambió el pedido");
        assert_eq!(req.lines.len(), 1);
    }

    #[test]
    fn checkout_sends_only_product_id_and_quantity() {
        let mut cart = Cart::new();
        cart.add_or_merge(&product(3, "Widget", 10.0, 5), 2).unwrap();

        let req = cart.checkout().unwrap();
        assert_eq!(
            req.lines,
            vec![SaleLineDto {
                product_id: 3,
                quantity: 2
            }]
        );
    }

    #[test]
    fn stock_warning_is_advisory_and_exact_stock_is_silent() {
        // The worked example: stock 5, adds of 2, 3, then 1 more.
        let mut cart = Cart::new();
        let widget = product(1, "Widget", 10.0, 5);

        assert_eq!(cart.add_or_merge(&widget, 2), Ok(None));
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 20.0);

        // Reaching stock exactly raises no warning.
        assert_eq!(cart.add_or_merge(&widget, 3), Ok(None));
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), 50.0);

        // Exceeding it warns but still applies the merge.
        let warning = cart.add_or_merge(&widget, 1).unwrap();
        assert_eq!(
            warning,
            Some(StockWarning {
                product_name: "Widget".into(),
                requested: 6,
                available: 5,
            })
        );
        assert_eq!(cart.lines()[0].quantity, 6);
        assert_eq!(cart.total(), 60.0);

        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn unit_price_is_fixed_at_first_add() {
        let mut cart = Cart::new();
        cart.add_or_merge(&product(1, "Widget", 10.0, 50), 2).unwrap();

        // A refreshed snapshot with a new price merges quantity only.
        cart.add_or_merge(&product(1, "Widget", 12.0, 50), 1).unwrap();

        assert_eq!(cart.lines()[0].unit_price, 10.0);
        assert_eq!(cart.lines()[0].subtotal, 30.0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add_or_merge(&product(2, "B", 1.0, 10), 1).unwrap();
        cart.add_or_merge(&product(1, "A", 1.0, 10), 1).unwrap();
        cart.add_or_merge(&product(2, "B", 1.0, 10), 1).unwrap();

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn from_sale_lines_rebuilds_the_cart() {
        let lines: Vec<SaleLine> = serde_json::from_str(
            r#"[
                {"producto": {"id": 1, "nombre": "Widget"}, "cantidad": 2,
                 "precio_unitario": "10.00", "subtotal": "20.00"},
                {"producto": {"nombre": "huérfano"}, "cantidad": 1,
                 "precio_unitario": 5, "subtotal": 5}
            ]"#,
        )
        .unwrap();

        let cart = Cart::from_sale_lines(&lines);
        // The line without a product id cannot be resubmitted.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_id, ProductId::new(1));
        assert_eq!(cart.total(), 20.0);
    }
}
