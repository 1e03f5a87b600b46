use crate::domain::a005_sale::api;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_timestamp;
use contracts::domain::a005_sale::{SaleAction, SaleHistoryEntry, SaleId};
use leptos::prelude::*;

fn badge_variant(action: SaleAction) -> &'static str {
    match action {
        SaleAction::Creation => "success",
        SaleAction::Modification => "primary",
        SaleAction::Cancellation => "error",
        SaleAction::Restoration => "neutral",
    }
}

fn pretty_json(value: &Option<serde_json::Value>) -> String {
    match value {
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        None => "N/A".to_string(),
    }
}

/// Change history of one sale: every creation/modification/cancellation/
/// restoration with its reason and before/after snapshots.
#[component]
pub fn SaleHistory(sale_id: SaleId, on_close: Callback<()>) -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<SaleHistoryEntry>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_history(sale_id).await {
            Ok(list) => set_entries.set(list),
            Err(e) => set_error.set(Some(format!("Error al cargar historial: {}", e))),
        }
        set_loading.set(false);
    });

    view! {
        <div class="details-container sale-history">
            <div class="details-header">
                <h3>{format!("Historial de Venta #{}", sale_id.value())}</h3>
                <p class="muted">{"Muestra todos los cambios realizados en esta venta."}</p>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="sale-history__entries">
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando historial..."</p> }>
                    <Show
                        when=move || !entries.get().is_empty()
                        fallback=|| view! { <p class="muted">"No hay historial para esta venta."</p> }
                    >
                        <For
                            each=move || entries.get()
                            key=|entry| entry.id
                            children=move |entry: SaleHistoryEntry| {
                                view! {
                                    <div class="sale-history__entry">
                                        <div class="sale-history__entry-header">
                                            <Badge variant=badge_variant(entry.action)>
                                                {entry.action.label()}
                                            </Badge>
                                            <span class="muted">
                                                {format!(
                                                    "{} por {}",
                                                    format_timestamp(entry.date),
                                                    entry.user.name
                                                )}
                                            </span>
                                        </div>

                                        {entry.reason.as_ref().map(|reason| view! {
                                            <p class="sale-history__reason">
                                                {format!("Motivo: \"{}\"", reason)}
                                            </p>
                                        })}

                                        <div class="sale-history__diff">
                                            <div>
                                                <h4>{"Datos Anteriores"}</h4>
                                                <pre>{pretty_json(&entry.previous)}</pre>
                                            </div>
                                            <div>
                                                <h4>{"Datos Nuevos"}</h4>
                                                <pre>{pretty_json(&entry.current)}</pre>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </Show>
            </div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    {"Cerrar"}
                </Button>
            </div>
        </div>
    }
}
