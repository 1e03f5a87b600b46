use crate::domain::a004_product::api as product_api;
use crate::domain::a005_sale::api;
use contracts::domain::a004_product::{Product, ProductId};
use contracts::domain::a005_sale::{Cart, SaleId};
use leptos::prelude::*;

/// ViewModel shared by the new-sale and edit-sale screens.
///
/// Wraps the pure [`Cart`] in signals and drives the submission lifecycle:
/// the submit affordance is disabled while a request is in flight, a
/// backend rejection leaves the cart untouched so the user can adjust and
/// retry, and local validation errors never reach the network.
#[derive(Clone, Copy)]
pub struct SaleCartViewModel {
    pub cart: RwSignal<Cart>,
    /// Catalog snapshot fetched at screen load; stock labels refresh after
    /// a successful submit, captured line prices do not.
    pub products: RwSignal<Vec<Product>>,
    pub selected_product_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub warning: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl SaleCartViewModel {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            products: RwSignal::new(Vec::new()),
            selected_product_id: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_string()),
            error: RwSignal::new(None),
            warning: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Fetch the catalog snapshot.
    pub fn load_products(&self) {
        let products = self.products;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(list) => products.set(list),
                Err(e) => error.set(Some(format!("No se pudieron cargar los productos: {}", e))),
            }
        });
    }

    /// Options for the product picker: name, price and current stock.
    pub fn product_options(&self) -> Vec<(String, String)> {
        self.products
            .get()
            .into_iter()
            .map(|p| {
                (
                    p.id.value().to_string(),
                    format!("{} (${:.2}) - Stock: {}", p.name, p.unit_price, p.stock),
                )
            })
            .collect()
    }

    /// Add the selected product with the entered quantity, merging into an
    /// existing line. A stock overrun is surfaced as a non-blocking warning.
    pub fn add_selected(&self) {
        self.error.set(None);
        self.warning.set(None);

        let selected = self.selected_product_id.get();
        let quantity = self.quantity.get().trim().parse::<u32>().unwrap_or(0);

        let product = selected
            .parse::<i32>()
            .ok()
            .and_then(|id| self.products.get().into_iter().find(|p| p.id.value() == id));

        let Some(product) = product else {
            self.error
                .set(Some("Selecciona un producto y una cantidad válida.".to_string()));
            return;
        };

        let result = {
            let mut outcome = Ok(None);
            self.cart.update(|cart| {
                outcome = cart.add_or_merge(&product, quantity);
            });
            outcome
        };

        match result {
            Ok(None) => {
                // Reset inputs for the next line.
                self.selected_product_id.set(String::new());
                self.quantity.set("1".to_string());
            }
            Ok(Some(stock_warning)) => {
                self.warning.set(Some(stock_warning.to_string()));
                self.selected_product_id.set(String::new());
                self.quantity.set("1".to_string());
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn remove_line(&self, product_id: ProductId) {
        self.cart.update(|cart| cart.remove(product_id));
    }

    pub fn total(&self) -> f64 {
        self.cart.get().total()
    }

    /// Submit the cart as a new sale. On acceptance the cart is cleared and
    /// the catalog snapshot re-fetched; on rejection the backend's message
    /// is shown and the cart stays intact.
    pub fn submit_new(&self, on_accepted: Callback<()>) {
        self.error.set(None);

        let request = match self.cart.get().checkout() {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let vm = *self;
        self.is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_sale(&request).await {
                Ok(()) => {
                    vm.cart.update(|cart| cart.clear());
                    vm.warning.set(None);
                    vm.load_products();
                    on_accepted.run(());
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.is_submitting.set(false);
        });
    }

    /// Submit the cart as a replacement for an existing sale's lines.
    /// Requires a non-blank reason; the caller decides what acceptance
    /// means (the edit screen closes its tab).
    pub fn submit_edit(&self, sale_id: SaleId, reason: String, on_accepted: Callback<()>) {
        self.error.set(None);

        let request = match self.cart.get().checkout_update(&reason) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let vm = *self;
        self.is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_sale_lines(sale_id, &request).await {
                Ok(()) => on_accepted.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
            vm.is_submitting.set(false);
        });
    }
}
