use crate::shared::components::table::format_price;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stat card for dashboard headline figures.
///
/// `None` renders as a placeholder while data is loading.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary money value (None = loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Accent: "default", "positive" (green) or "highlight" (blue)
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent.get().as_deref().unwrap_or("default") {
        "positive" => "stat-card--positive",
        "highlight" => "stat-card--highlight",
        _ => "",
    };

    view! {
        <div class=move || format!("stat-card {}", accent_class())>
            <div class="stat-card__header">
                {icon(&icon_name)}
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || match value.get() {
                    Some(v) => format_price(v),
                    None => "—".to_string(),
                }}
            </div>
        </div>
    }
}
