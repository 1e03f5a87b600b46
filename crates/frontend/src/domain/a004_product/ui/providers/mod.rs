use crate::domain::a003_supplier;
use crate::domain::a004_product::api;
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::icons::icon;
use contracts::domain::a004_product::{AssignSuppliersRequest, ProductId, SupplierLink};
use leptos::prelude::*;

/// One supplier row of the assignment form. Purchase price is kept as the
/// raw input string until save, like any other form field.
#[derive(Clone, Debug)]
struct LinkForm {
    supplier_id: i32,
    supplier_name: String,
    selected: bool,
    price: String,
    code: String,
}

/// Supplier assignment dialog: check the suppliers that provide this
/// product and record the purchase price (and optional supplier code) for
/// each. Saving replaces the whole association set.
#[component]
pub fn ProductSuppliers(
    product_id: ProductId,
    product_name: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let rows = RwSignal::new(Vec::<LinkForm>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        let suppliers = a003_supplier::api::fetch_suppliers().await;
        let links = api::fetch_product_suppliers(product_id).await;

        match (suppliers, links) {
            (Ok(suppliers), Ok(links)) => {
                let forms = suppliers
                    .into_iter()
                    .map(|s| {
                        let existing = links.iter().find(|l| l.supplier_id == s.id.value());
                        LinkForm {
                            supplier_id: s.id.value(),
                            supplier_name: s.name,
                            selected: existing.is_some(),
                            price: existing
                                .map(|l| l.purchase_price.to_string())
                                .unwrap_or_default(),
                            code: existing
                                .and_then(|l| l.supplier_code.clone())
                                .unwrap_or_default(),
                        }
                    })
                    .collect();
                rows.set(forms);
            }
            (Err(e), _) | (_, Err(e)) => {
                error.set(Some(format!("No se pudieron cargar los datos: {}", e)));
            }
        }
        loading.set(false);
    });

    let toggle = move |supplier_id: i32, checked: bool| {
        rows.update(|list| {
            if let Some(row) = list.iter_mut().find(|r| r.supplier_id == supplier_id) {
                row.selected = checked;
            }
        });
    };

    let update_price = move |supplier_id: i32, value: String| {
        rows.update(|list| {
            if let Some(row) = list.iter_mut().find(|r| r.supplier_id == supplier_id) {
                row.price = value;
            }
        });
    };

    let update_code = move |supplier_id: i32, value: String| {
        rows.update(|list| {
            if let Some(row) = list.iter_mut().find(|r| r.supplier_id == supplier_id) {
                row.code = value;
            }
        });
    };

    let save = move |_| {
        error.set(None);

        let mut links = Vec::new();
        for row in rows.get().into_iter().filter(|r| r.selected) {
            let link = SupplierLink {
                supplier_id: row.supplier_id,
                purchase_price: row.price.trim().parse::<f64>().unwrap_or(0.0),
                supplier_code: if row.code.is_empty() {
                    None
                } else {
                    Some(row.code.clone())
                },
            };
            if link.validate().is_err() {
                error.set(Some(format!(
                    "El precio de compra para el proveedor \"{}\" debe ser un número positivo.",
                    row.supplier_name
                )));
                return;
            }
            links.push(link);
        }

        let request = AssignSuppliersRequest { suppliers: links };
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::assign_suppliers(product_id, &request).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{format!("Asignar Proveedores a: {}", product_name)}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando proveedores..."</p> }
            >
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=|| view! {
                        <p class="muted">
                            "No hay proveedores registrados. Ve a la sección de \"Proveedores\" para añadirlos."
                        </p>
                    }
                >
                    <div class="details-form supplier-links">
                        <For
                            each=move || rows.get()
                            key=|row| row.supplier_id
                            children=move |row: LinkForm| {
                                let supplier_id = row.supplier_id;
                                let is_selected = Signal::derive(move || {
                                    rows.get()
                                        .iter()
                                        .find(|r| r.supplier_id == supplier_id)
                                        .map(|r| r.selected)
                                        .unwrap_or(false)
                                });
                                view! {
                                    <div class="supplier-links__row">
                                        <Checkbox
                                            id=format!("supplier-{}", supplier_id)
                                            label=row.supplier_name.clone()
                                            checked=is_selected
                                            on_change=Callback::new(move |checked| {
                                                toggle(supplier_id, checked)
                                            })
                                        />
                                        <Show when=move || is_selected.get()>
                                            <div class="supplier-links__fields">
                                                <div class="form__group">
                                                    <label class="form__label">{"Precio de Compra"}</label>
                                                    <input
                                                        type="number"
                                                        step="0.01"
                                                        class="form__input"
                                                        prop:value=move || {
                                                            rows.get()
                                                                .iter()
                                                                .find(|r| r.supplier_id == supplier_id)
                                                                .map(|r| r.price.clone())
                                                                .unwrap_or_default()
                                                        }
                                                        on:input=move |ev| {
                                                            update_price(supplier_id, event_target_value(&ev))
                                                        }
                                                    />
                                                </div>
                                                <div class="form__group">
                                                    <label class="form__label">{"Código del Proveedor"}</label>
                                                    <input
                                                        type="text"
                                                        class="form__input"
                                                        prop:value=move || {
                                                            rows.get()
                                                                .iter()
                                                                .find(|r| r.supplier_id == supplier_id)
                                                                .map(|r| r.code.clone())
                                                                .unwrap_or_default()
                                                        }
                                                        on:input=move |ev| {
                                                            update_code(supplier_id, event_target_value(&ev))
                                                        }
                                                    />
                                                </div>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="details-actions">
                        <Button on_click=Callback::new(save)>
                            {icon("save")}
                            {"Guardar Cambios"}
                        </Button>
                        <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                            {icon("cancel")}
                            {"Cancelar"}
                        </Button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
