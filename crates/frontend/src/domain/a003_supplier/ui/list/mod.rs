pub mod state;

use self::state::create_state;
use crate::domain::a003_supplier::api;
use crate::domain::a003_supplier::ui::details::SupplierDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_supplier::Supplier;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SupplierRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<Supplier> for SupplierRow {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id.value(),
            name: s.name,
            phone: s.phone.unwrap_or_else(|| "-".to_string()),
            email: s.email.unwrap_or_else(|| "-".to_string()),
            address: s.address.unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl Sortable for SupplierRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let (items, set_items) = signal::<Vec<SupplierRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(v) => {
                    let rows: Vec<SupplierRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        modal_stack.push(move |handle| {
            view! {
                <SupplierDetails
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
        });
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

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Proveedores"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Nuevo Proveedor"}
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("id")>
                                "ID"
                                <span class={move || get_sort_class(&state.get().sort_field, "id")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "id", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Nombre"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Teléfono"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("email")>
                                "Email"
                                <span class={move || get_sort_class(&state.get().sort_field, "email")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "email", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Dirección"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.address}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
