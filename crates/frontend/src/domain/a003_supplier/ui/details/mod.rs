use crate::domain::a003_supplier::api;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a003_supplier::SupplierDto;
use leptos::prelude::*;

/// Create-supplier dialog: name plus optional contact data.
#[component]
pub fn SupplierDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(SupplierDto::default());
    let error = RwSignal::new(Option::<String>::None);

    let set_optional = |value: String| if value.is_empty() { None } else { Some(value) };

    let save = move |_| {
        let current = form.get();
        if let Err(msg) = current.validate() {
            error.set(Some(msg));
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::create_supplier(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Nuevo Proveedor"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Nombre"
                    id="supplier-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.name = value);
                    })
                />
                <Input
                    label="Teléfono"
                    id="supplier-phone"
                    value=Signal::derive(move || form.get().phone.unwrap_or_default())
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.phone = set_optional(value));
                    })
                />
                <Input
                    label="Email"
                    id="supplier-email"
                    value=Signal::derive(move || form.get().email.unwrap_or_default())
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.email = set_optional(value));
                    })
                />
                <Input
                    label="Dirección"
                    id="supplier-address"
                    value=Signal::derive(move || form.get().address.unwrap_or_default())
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.address = set_optional(value));
                    })
                />
            </div>

            <div class="details-actions">
                <Button on_click=Callback::new(save)>
                    {icon("save")}
                    {"Guardar Proveedor"}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("cancel")}
                    {"Cancelar"}
                </Button>
            </div>
        </div>
    }
}
