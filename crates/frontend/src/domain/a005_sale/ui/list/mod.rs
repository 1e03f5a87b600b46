pub mod state;

use self::state::create_state;
use crate::domain::a005_sale::api;
use crate::domain::a005_sale::ui::history::SaleHistory;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{sale_edit_tab_label, tab_label_for_key};
use crate::shared::components::table::format_price;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_sale::{Sale, SaleId};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SaleRow {
    pub id: i32,
    pub date: String,
    pub seller: String,
    pub total: f64,
    pub cancelled: bool,
}

impl From<Sale> for SaleRow {
    fn from(s: Sale) -> Self {
        Self {
            id: s.id.value(),
            date: format_timestamp(s.created_at),
            total: s.total,
            cancelled: s.is_cancelled(),
            seller: if s.seller.name.is_empty() {
                "N/A".to_string()
            } else {
                s.seller.name
            },
        }
    }
}

impl Sortable for SaleRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            // DD/MM/YYYY strings don't sort chronologically; the id is
            // assigned in creation order, so it stands in for the date.
            "date" => self.id.cmp(&other.id),
            "seller" => self.seller.to_lowercase().cmp(&other.seller.to_lowercase()),
            "total" => self
                .total
                .partial_cmp(&other.total)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn SaleList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let state = create_state();
    let (items, set_items) = signal::<Vec<SaleRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_sales().await {
                Ok(v) => {
                    let rows: Vec<SaleRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_history_modal = move |id: SaleId| {
        modal_stack.push_with_frame(
            Some("max-width: min(800px, 95vw); width: min(800px, 95vw);".to_string()),
            None,
            move |handle| {
                view! {
                    <SaleHistory
                        sale_id=id
                        on_close=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let open_edit_tab = move |id: SaleId| {
        let key = format!("a005_sale_edit_{}", id.value());
        tabs_store.open_tab(&key, &sale_edit_tab_label(id.value()));
    };

    let open_new_sale_tab = move || {
        tabs_store.open_tab("a005_sale_new", tab_label_for_key("a005_sale_new"));
    };

    let cancel_sale = move |id: SaleId| {
        if !confirm(&format!(
            "¿Cancelar la Venta #{}? Esta acción cancelará la venta. (Sin ajuste de stock).",
            id.value()
        )) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::cancel_sale(id).await {
                Ok(()) => {
                    set_notice.set(Some(
                        "Venta cancelada. La venta ha sido movida a la papelera.".to_string(),
                    ));
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let restore_sale = move |id: SaleId| {
        if !confirm(&format!(
            "¿Restaurar la Venta #{}? Esta acción restaurará la venta. (Sin ajuste de stock).",
            id.value()
        )) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::restore_sale(id).await {
                Ok(()) => {
                    set_notice.set(Some("Venta restaurada.".to_string()));
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
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
                <h2>{"Gestión de Ventas"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_new_sale_tab()>
                        {icon("plus")}
                        {"Crear Venta"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("date")>
                                "Fecha"
                                <span class={move || get_sort_class(&state.get().sort_field, "date")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "date", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("seller")>
                                "Vendedor"
                                <span class={move || get_sort_class(&state.get().sort_field, "seller")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "seller", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("total")>
                                "Total"
                                <span class={move || get_sort_class(&state.get().sort_field, "total")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "total", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id = SaleId::new(row.id);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format!("#{}", row.id)}</td>
                                    <td class="table__cell">{row.date}</td>
                                    <td class="table__cell">{row.seller}</td>
                                    <td class="table__cell">{format_price(row.total)}</td>
                                    <td class="table__cell">
                                        {if row.cancelled {
                                            view! { <Badge variant="error">{"Cancelada"}</Badge> }.into_any()
                                        } else {
                                            view! { <Badge variant="success">{"Activa"}</Badge> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        {if row.cancelled {
                                            view! {
                                                <button
                                                    class="button button--secondary button--small"
                                                    title="Restaurar"
                                                    on:click=move |_| restore_sale(id)
                                                >
                                                    {icon("undo")}
                                                </button>
                                            }.into_any()
                                        } else {
                                            view! {
                                                <button
                                                    class="button button--secondary button--small"
                                                    title="Ver Historial"
                                                    on:click=move |_| open_history_modal(id)
                                                >
                                                    {icon("history")}
                                                </button>
                                                <button
                                                    class="button button--secondary button--small"
                                                    title="Editar Detalles"
                                                    on:click=move |_| open_edit_tab(id)
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    title="Cancelar Venta"
                                                    on:click=move |_| cancel_sale(id)
                                                >
                                                    {icon("delete")}
                                                </button>
                                            }.into_any()
                                        }}
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
