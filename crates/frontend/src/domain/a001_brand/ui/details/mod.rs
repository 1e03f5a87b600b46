use crate::domain::a001_brand::api;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a001_brand::BrandDto;
use leptos::prelude::*;

/// Create-brand dialog. The API has no brand update, so this form only
/// creates.
#[component]
pub fn BrandDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(BrandDto::default());
    let error = RwSignal::new(Option::<String>::None);

    let save = move |_| {
        let current = form.get();
        if let Err(msg) = current.validate() {
            error.set(Some(msg));
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::create_brand(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Nueva Marca"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Nombre"
                    id="brand-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.name = value);
                    })
                    placeholder="Nombre de la marca"
                />
            </div>

            <div class="details-actions">
                <Button on_click=Callback::new(save)>
                    {icon("save")}
                    {"Guardar Marca"}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("cancel")}
                    {"Cancelar"}
                </Button>
            </div>
        </div>
    }
}
