use crate::domain::a001_brand;
use crate::domain::a002_product_line;
use crate::domain::a004_product::api;
use contracts::domain::a001_brand::Brand;
use contracts::domain::a002_product_line::ProductLine;
use contracts::domain::a004_product::{ProductDto, ProductId};
use leptos::prelude::*;

/// ViewModel for the product details form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: RwSignal<Option<ProductId>>,
    pub form: RwSignal<ProductDto>,
    pub brands: RwSignal<Vec<Brand>>,
    pub lines: RwSignal<Vec<ProductLine>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(ProductDto::default()),
            brands: RwSignal::new(Vec::new()),
            lines: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.get().validate().is_ok()
    }

    /// Load brand and line catalogs for the pickers. Also called again after
    /// an on-the-fly brand/line creation.
    pub fn load_catalogs(&self) {
        let brands = self.brands;
        let lines = self.lines;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match a001_brand::api::fetch_brands().await {
                Ok(list) => brands.set(list),
                Err(e) => error.set(Some(format!("Error al cargar marcas: {}", e))),
            }
            match a002_product_line::api::fetch_lines().await {
                Ok(list) => lines.set(list),
                Err(e) => error.set(Some(format!("Error al cargar líneas: {}", e))),
            }
        });
    }

    /// Load form data from the server when editing an existing product.
    pub fn load_if_needed(&self, id: Option<ProductId>) {
        self.id.set(id);
        let Some(existing_id) = id else {
            return;
        };

        let form = self.form;
        let error = self.error;
        let loading = self.loading;
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_product(existing_id).await {
                Ok(product) => {
                    form.set(ProductDto {
                        name: product.name,
                        description: product.description,
                        unit_price: product.unit_price,
                        stock: product.stock,
                        image: product.image,
                        brand_id: product.brand.id,
                        line_id: product.line.id,
                    });
                }
                Err(e) => error.set(Some(format!("Error al cargar el producto: {}", e))),
            }
            loading.set(false);
        });
    }

    /// Lines of the currently selected brand. An empty brand yields an
    /// empty list, mirroring the disabled line picker.
    pub fn line_options(&self) -> Vec<(String, String)> {
        let Some(brand_id) = self.form.get().brand_id else {
            return Vec::new();
        };
        self.lines
            .get()
            .into_iter()
            .filter(|line| line.brand.id == Some(brand_id))
            .map(|line| (line.id.value().to_string(), line.name))
            .collect()
    }

    /// Selecting a brand resets the line: lines belong to one brand.
    pub fn select_brand(&self, brand_id: Option<i32>) {
        self.form.update(|f| {
            f.brand_id = brand_id;
            f.line_id = None;
        });
    }

    /// Save form data to the server: POST for a new product, PATCH when
    /// editing.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let id = self.id.get();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(existing_id) => api::update_product(existing_id, &current).await,
                None => api::create_product(&current).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
