use crate::shared::date_utils::today;
use contracts::dashboards::d400_financial_summary::DateRange;
use leptos::prelude::*;

/// Date range selector: two native date inputs plus quick-range buttons.
#[component]
pub fn DateRangePicker(
    /// "from" date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,
    /// "to" date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,
    /// Callback fired with (from, to) on every change
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let apply_range = move |range: DateRange| {
        on_change.run((range.start.to_string(), range.end.to_string()));
    };

    view! {
        <div class="date-range-picker">
            <button
                class="button button--ghost button--small"
                on:click=move |_| apply_range(DateRange::this_month(today()))
            >
                "Este Mes"
            </button>
            <button
                class="button button--ghost button--small"
                on:click=move |_| apply_range(DateRange::last_month(today()))
            >
                "Mes Pasado"
            </button>
            <button
                class="button button--ghost button--small"
                on:click=move |_| apply_range(DateRange::this_year(today()))
            >
                "Este Año"
            </button>

            <input
                type="date"
                class="form__input date-range-picker__input"
                prop:value=move || date_from.get()
                on:change=move |ev| on_from_change(event_target_value(&ev))
            />
            <span>"-"</span>
            <input
                type="date"
                class="form__input date-range-picker__input"
                prop:value=move || date_to.get()
                on:change=move |ev| on_to_change(event_target_value(&ev))
            />
        </div>
    }
}
