use crate::domain::a001_brand;
use crate::domain::a002_product_line::api;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a002_product_line::ProductLineDto;
use leptos::prelude::*;

/// Create-product-line dialog: name, optional description and the owning
/// brand.
#[component]
pub fn ProductLineDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ProductLineDto::default());
    let error = RwSignal::new(Option::<String>::None);
    let brands = RwSignal::new(Vec::<(String, String)>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match a001_brand::api::fetch_brands().await {
            Ok(list) => brands.set(
                list.into_iter()
                    .map(|b| (b.id.value().to_string(), b.name))
                    .collect(),
            ),
            Err(e) => error.set(Some(format!("Error al cargar marcas: {}", e))),
        }
    });

    let save = move |_| {
        let current = form.get();
        if let Err(msg) = current.validate() {
            error.set(Some(msg));
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::create_line(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Nueva Línea"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Select
                    label="Marca"
                    id="line-brand"
                    value=Signal::derive(move || {
                        form.get()
                            .brand_id
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    })
                    options=Signal::derive(move || brands.get())
                    placeholder="Selecciona una marca"
                    on_change=Callback::new(move |value: String| {
                        form.update(|f| f.brand_id = value.parse::<i32>().ok());
                    })
                />
                <Input
                    label="Nombre de la Línea"
                    id="line-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.name = value);
                    })
                />
                <Input
                    label="Descripción (Opcional)"
                    id="line-description"
                    value=Signal::derive(move || form.get().description.unwrap_or_default())
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| {
                            f.description = if value.is_empty() { None } else { Some(value) };
                        });
                    })
                />
            </div>

            <div class="details-actions">
                <Button on_click=Callback::new(save)>
                    {icon("save")}
                    {"Guardar Línea"}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("cancel")}
                    {"Cancelar"}
                </Button>
            </div>
        </div>
    }
}
