pub mod state;

use self::state::create_state;
use crate::domain::a004_product::api;
use crate::domain::a004_product::ui::details::ProductDetails;
use crate::domain::a004_product::ui::providers::ProductSuppliers;
use crate::shared::components::table::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_product::{Product, ProductId};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub unit_price: f64,
    pub stock: i32,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.value(),
            name: p.name,
            brand: p.brand.name,
            unit_price: p.unit_price,
            stock: p.stock,
        }
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter) || self.brand.to_lowercase().contains(&filter)
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "brand" => self.brand.to_lowercase().cmp(&other.brand.to_lowercase()),
            "price" => self
                .unit_price
                .partial_cmp(&other.unit_price)
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products().await {
                Ok(v) => {
                    let rows: Vec<ProductRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_modal = move |id: Option<ProductId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(700px, 95vw); width: min(700px, 95vw);".to_string()),
            None,
            move |handle| {
                view! {
                    <ProductDetails
                        id=id
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                fetch();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let open_suppliers_modal = move |id: ProductId, name: String| {
        modal_stack.push_with_frame(
            Some("max-width: min(625px, 95vw); width: min(625px, 95vw);".to_string()),
            None,
            move |handle| {
                view! {
                    <ProductSuppliers
                        product_id=id
                        product_name=name.clone()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                fetch();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let visible_items = move || {
        let s = state.get();
        let mut items_vec = filter_list(items.get(), &s.filter);
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Productos"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().filter)
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| s.filter = value);
                        })
                        placeholder="Buscar por nombre o marca..."
                    />
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Nuevo Producto"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Nombre"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("brand")>
                                "Marca"
                                <span class={move || get_sort_class(&state.get().sort_field, "brand")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "brand", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("price")>
                                "Precio"
                                <span class={move || get_sort_class(&state.get().sort_field, "price")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "price", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("stock")>
                                "Stock"
                                <span class={move || get_sort_class(&state.get().sort_field, "stock")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "stock", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let id = ProductId::new(row.id);
                            let name_for_suppliers = row.name.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name.clone()}</td>
                                    <td class="table__cell">{row.brand}</td>
                                    <td class="table__cell">{format_price(row.unit_price)}</td>
                                    <td class="table__cell">{row.stock}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary button--small"
                                            on:click=move |_| open_details_modal(Some(id))
                                        >
                                            {icon("edit")}
                                            {"Editar"}
                                        </button>
                                        <button
                                            class="button button--ghost button--small"
                                            on:click=move |_| open_suppliers_modal(id, name_for_suppliers.clone())
                                        >
                                            {icon("truck")}
                                            {"Proveedores"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
