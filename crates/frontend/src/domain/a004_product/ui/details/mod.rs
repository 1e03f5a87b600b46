pub mod view_model;

use self::view_model::ProductDetailsViewModel;
use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::domain::a002_product_line::ui::details::ProductLineDetails;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_product::ProductId;
use leptos::prelude::*;

/// Create/edit product dialog. Brand and line pickers include "+" shortcuts
/// that open the corresponding create dialogs on top of this one.
#[component]
pub fn ProductDetails(
    id: Option<ProductId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let vm = ProductDetailsViewModel::new();
    vm.load_catalogs();
    vm.load_if_needed(id);

    let open_new_brand = move |_| {
        modal_stack.push(move |handle| {
            view! {
                <BrandDetails
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            vm.load_catalogs();
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

    let open_new_line = move |_| {
        modal_stack.push(move |handle| {
            view! {
                <ProductLineDetails
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            vm.load_catalogs();
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

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar Producto" } else { "Crear Nuevo Producto" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <p>"Cargando datos del producto..."</p> }
            >
                <div class="details-form details-form--two-columns">
                    <div class="details-form__column">
                        <Input
                            label="Nombre del Producto"
                            id="product-name"
                            value=Signal::derive(move || vm.form.get().name)
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| f.name = value);
                            })
                        />
                        <Input
                            label="Descripción"
                            id="product-description"
                            value=Signal::derive(move || vm.form.get().description.unwrap_or_default())
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| {
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                });
                            })
                        />
                        <Input
                            label="URL de la Imagen"
                            id="product-image"
                            placeholder="https://ejemplo.com/imagen.jpg"
                            value=Signal::derive(move || vm.form.get().image.unwrap_or_default())
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| {
                                    f.image = if value.is_empty() { None } else { Some(value) };
                                });
                            })
                        />
                    </div>

                    <div class="details-form__column">
                        <Input
                            label="Precio"
                            id="product-price"
                            input_type="number"
                            value=Signal::derive(move || {
                                let price = vm.form.get().unit_price;
                                if price == 0.0 { String::new() } else { price.to_string() }
                            })
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| {
                                    f.unit_price = value.parse::<f64>().unwrap_or(0.0);
                                });
                            })
                        />
                        <Input
                            label="Stock"
                            id="product-stock"
                            input_type="number"
                            value=Signal::derive(move || vm.form.get().stock.to_string())
                            on_input=Callback::new(move |value: String| {
                                vm.form.update(|f| {
                                    f.stock = value.parse::<i32>().unwrap_or(0);
                                });
                            })
                        />

                        <div class="form__picker-row">
                            <Select
                                label="Marca"
                                id="product-brand"
                                value=Signal::derive(move || {
                                    vm.form
                                        .get()
                                        .brand_id
                                        .map(|id| id.to_string())
                                        .unwrap_or_default()
                                })
                                options=Signal::derive(move || {
                                    vm.brands
                                        .get()
                                        .into_iter()
                                        .map(|b| (b.id.value().to_string(), b.name))
                                        .collect::<Vec<_>>()
                                })
                                placeholder="Selecciona una marca"
                                on_change=Callback::new(move |value: String| {
                                    vm.select_brand(value.parse::<i32>().ok());
                                })
                            />
                            <button class="button button--ghost button--small" on:click=open_new_brand>
                                {icon("plus")}
                            </button>
                        </div>

                        <div class="form__picker-row">
                            <Select
                                label="Línea"
                                id="product-line"
                                value=Signal::derive(move || {
                                    vm.form
                                        .get()
                                        .line_id
                                        .map(|id| id.to_string())
                                        .unwrap_or_default()
                                })
                                options=Signal::derive(move || vm.line_options())
                                placeholder="Selecciona una línea"
                                on_change=Callback::new(move |value: String| {
                                    vm.form.update(|f| f.line_id = value.parse::<i32>().ok());
                                })
                            />
                            <button class="button button--ghost button--small" on:click=open_new_line>
                                {icon("plus")}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="details-actions">
                    <Button
                        on_click=Callback::new(move |_| vm.save_command(on_saved))
                        disabled=Signal::derive(move || !vm.is_form_valid())
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Guardar Cambios" } else { "Crear Producto" }}
                    </Button>
                    <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                        {icon("cancel")}
                        {"Cancelar"}
                    </Button>
                </div>
            </Show>
        </div>
    }
}
