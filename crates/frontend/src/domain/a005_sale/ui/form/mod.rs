pub mod view_model;

use self::view_model::SaleCartViewModel;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Line-item table of the sale in progress, shared by the new-sale and
/// edit-sale screens.
#[component]
pub fn CartTable(vm: SaleCartViewModel) -> impl IntoView {
    view! {
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>
                    <th class="table__header-cell">{"Producto"}</th>
                    <th class="table__header-cell">{"Cantidad"}</th>
                    <th class="table__header-cell">{"P. Unitario"}</th>
                    <th class="table__header-cell">{"Subtotal"}</th>
                    <th class="table__header-cell">{"Acción"}</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let lines = vm.cart.get().lines().to_vec();
                    if lines.is_empty() {
                        view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan="5">
                                    {"Aún no hay productos en la venta."}
                                </td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        lines
                            .into_iter()
                            .map(|line| {
                                let product_id = line.product_id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{line.name.clone()}</td>
                                        <td class="table__cell">{line.quantity}</td>
                                        <td class="table__cell">{format_price(line.unit_price)}</td>
                                        <td class="table__cell">{format_price(line.subtotal)}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--ghost button--small"
                                                title="Quitar"
                                                on:click=move |_| vm.remove_line(product_id)
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Picker card for adding products to the cart.
#[component]
pub fn AddProductCard(vm: SaleCartViewModel) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3>{"Agregar Productos"}</h3>
            </div>
            <div class="card__body">
                <Select
                    label="Producto"
                    id="sale-product"
                    value=Signal::derive(move || vm.selected_product_id.get())
                    options=Signal::derive(move || vm.product_options())
                    placeholder="Selecciona un producto"
                    on_change=Callback::new(move |value: String| {
                        vm.selected_product_id.set(value);
                    })
                />
                <Input
                    label="Cantidad"
                    id="sale-quantity"
                    input_type="number"
                    value=Signal::derive(move || vm.quantity.get())
                    on_input=Callback::new(move |value: String| {
                        vm.quantity.set(value);
                    })
                />
                <Button on_click=Callback::new(move |_| vm.add_selected())>
                    {icon("plus")}
                    {"Agregar a la Venta"}
                </Button>
            </div>
        </div>
    }
}

/// New-sale screen: compose the cart and submit it as one sale.
#[component]
#[allow(non_snake_case)]
pub fn SaleFormPage() -> impl IntoView {
    let vm = SaleCartViewModel::new();
    vm.load_products();

    let (success, set_success) = signal(Option::<String>::None);

    let submit = move |_| {
        set_success.set(None);
        vm.submit_new(Callback::new(move |_| {
            set_success.set(Some("Venta registrada correctamente.".to_string()));
        }));
    };

    view! {
        <div class="content sale-form">
            <div class="header">
                <h2>{"Nueva Venta"}</h2>
            </div>

            <div class="sale-form__columns">
                <AddProductCard vm=vm />

                <div class="card sale-form__summary">
                    <div class="card__header">
                        <h3>{"Resumen de Venta"}</h3>
                    </div>
                    <div class="card__body">
                        <CartTable vm=vm />

                        {move || vm.warning.get().map(|w| view! {
                            <div class="alert alert--warning">{w}</div>
                        })}
                        {move || vm.error.get().map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}
                        {move || success.get().map(|s| view! {
                            <div class="alert alert--success">{s}</div>
                        })}

                        <div class="sale-form__footer">
                            <h3>{move || format!("Total: {}", format_price(vm.total()))}</h3>
                            <Button
                                on_click=Callback::new(submit)
                                disabled=Signal::derive(move || vm.is_submitting.get())
                            >
                                {move || if vm.is_submitting.get() {
                                    "Registrando..."
                                } else {
                                    "Registrar Venta"
                                }}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
