use crate::domain::a005_sale::api;
use crate::domain::a005_sale::ui::form::view_model::SaleCartViewModel;
use crate::domain::a005_sale::ui::form::{AddProductCard, CartTable};
use crate::shared::components::table::format_price;
use crate::shared::components::ui::{Button, Textarea};
use contracts::domain::a005_sale::{Cart, SaleId};
use leptos::prelude::*;

/// Edit-sale screen: the recorded lines pre-populate the cart, a change
/// reason is mandatory, and a cancelled sale cannot be edited until it is
/// restored.
#[component]
pub fn SaleEditPage(id: SaleId, on_close: Callback<()>) -> impl IntoView {
    let vm = SaleCartViewModel::new();
    vm.load_products();

    let reason = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let (locked, set_locked) = signal(false);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_sale(id).await {
            Ok(sale) => {
                if sale.is_cancelled() {
                    vm.error.set(Some(
                        "No se puede editar una venta cancelada. Restáurala primero.".to_string(),
                    ));
                    set_locked.set(true);
                } else {
                    vm.cart.set(Cart::from_sale_lines(&sale.lines));
                }
            }
            Err(e) => {
                vm.error
                    .set(Some(format!("No se pudieron cargar los datos de la venta: {}", e)));
                set_locked.set(true);
            }
        }
        set_loading.set(false);
    });

    let submit = move |_| {
        vm.submit_edit(
            id,
            reason.get(),
            Callback::new(move |_| on_close.run(())),
        );
    };

    view! {
        <div class="content sale-form">
            <div class="header">
                <h2>{format!("Editar Venta #{}", id.value())}</h2>
                <div class="header__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        {"Volver a la lista"}
                    </Button>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando datos de la venta..."</p> }
            >
                <div class="sale-form__columns">
                    <AddProductCard vm=vm />

                    <div class="card sale-form__summary">
                        <div class="card__header">
                            <h3>{"Resumen de Venta"}</h3>
                        </div>
                        <div class="card__body">
                            <CartTable vm=vm />

                            <Textarea
                                label="Motivo de la Edición (Requerido)"
                                id="sale-edit-reason"
                                placeholder="Ej: Cliente cambió 2u de Producto A por 1u de Producto B..."
                                value=Signal::derive(move || reason.get())
                                on_input=Callback::new(move |value: String| {
                                    reason.set(value);
                                })
                            />

                            {move || vm.warning.get().map(|w| view! {
                                <div class="alert alert--warning">{w}</div>
                            })}
                            {move || vm.error.get().map(|e| view! {
                                <div class="alert alert--error">{e}</div>
                            })}

                            <div class="sale-form__footer">
                                <h3>{move || format!("Nuevo Total: {}", format_price(vm.total()))}</h3>
                                <Button
                                    on_click=Callback::new(submit)
                                    disabled=Signal::derive(move || {
                                        vm.is_submitting.get() || locked.get()
                                    })
                                >
                                    {move || if vm.is_submitting.get() {
                                        "Guardando Cambios..."
                                    } else {
                                        "Guardar Cambios"
                                    }}
                                </Button>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
