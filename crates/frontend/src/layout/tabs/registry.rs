//! Tab content registry - the single source of truth for tab.key → View.

use crate::dashboards::d400_financial_summary::ui::FinancialSummaryDashboard;
use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_product_line::ui::list::ProductLineList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_sale::ui::edit::SaleEditPage;
use crate::domain::a005_sale::ui::form::SaleFormPage;
use crate::domain::a005_sale::ui::list::SaleList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a005_sale::SaleId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// Parameterised keys (`a005_sale_edit_<id>`) embed the aggregate id in the
/// key so each edit session gets its own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "d400_financial_summary" => view! { <FinancialSummaryDashboard /> }.into_any(),

        "a001_brand" => view! { <BrandList /> }.into_any(),
        "a002_product_line" => view! { <ProductLineList /> }.into_any(),
        "a003_supplier" => view! { <SupplierList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),

        "a005_sale" => view! { <SaleList /> }.into_any(),
        "a005_sale_new" => view! { <SaleFormPage /> }.into_any(),

        k if k.starts_with("a005_sale_edit_") => {
            let raw_id = k.strip_prefix("a005_sale_edit_").unwrap_or_default();
            match SaleId::from_string(raw_id) {
                Ok(id) => view! {
                    <SaleEditPage
                        id=id
                        on_close=Callback::new({
                            let key_for_close = key_for_close.clone();
                            move |_| {
                                tabs_store.close_tab(&key_for_close);
                            }
                        })
                    />
                }
                .into_any(),
                Err(e) => {
                    leptos::logging::log!("invalid sale edit tab key '{}': {}", k, e);
                    view! { <div class="error">{"Venta no encontrada"}</div> }.into_any()
                }
            }
        }

        unknown => {
            view! {
                <div class="tab-placeholder">
                    {format!("Página no encontrada: {}", unknown)}
                </div>
            }
            .into_any()
        }
    }
}
