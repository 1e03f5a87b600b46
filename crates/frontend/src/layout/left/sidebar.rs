//! Sidebar component with grouped menu items.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Panel",
            icon: "bar-chart",
            items: vec![(
                "d400_financial_summary",
                tab_label_for_key("d400_financial_summary"),
                "bar-chart",
            )],
        },
        MenuGroup {
            id: "catalogs",
            label: "Catálogos",
            icon: "database",
            items: vec![
                ("a001_brand", tab_label_for_key("a001_brand"), "tag"),
                (
                    "a002_product_line",
                    tab_label_for_key("a002_product_line"),
                    "layers",
                ),
                ("a004_product", tab_label_for_key("a004_product"), "package"),
                ("a003_supplier", tab_label_for_key("a003_supplier"), "truck"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Ventas",
            icon: "shopping-cart",
            items: vec![
                ("a005_sale", tab_label_for_key("a005_sale"), "file-text"),
                (
                    "a005_sale_new",
                    tab_label_for_key("a005_sale_new"),
                    "shopping-cart",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let groups = get_menu_groups();

    view! {
        <nav class="sidebar">
            {groups
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-header">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <ul class="sidebar__items">
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(key, label, item_icon)| {
                                        let is_active = move || {
                                            tabs_store.active.get().as_deref() == Some(key)
                                        };
                                        view! {
                                            <li
                                                class="sidebar__item"
                                                class:sidebar__item--active=is_active
                                                on:click=move |_| tabs_store.open_tab(key, label)
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
