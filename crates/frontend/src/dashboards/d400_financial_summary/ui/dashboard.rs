use crate::dashboards::d400_financial_summary::api;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, format_price};
use crate::shared::date_utils::{format_timestamp, today};
use contracts::dashboards::d400_financial_summary::{
    DateRange, FinancialSummary, MonthlySalesPoint, SellerPerformanceRow, TopProductRow,
    TopSaleInfo,
};
use leptos::prelude::*;

/// Financial dashboard over a date range: headline figures, monthly sales,
/// top products, seller performance and the highest sale.
#[component]
#[allow(non_snake_case)]
pub fn FinancialSummaryDashboard() -> impl IntoView {
    let range = RwSignal::new(DateRange::this_month(today()));

    let summary = RwSignal::new(Option::<FinancialSummary>::None);
    let monthly = RwSignal::new(Vec::<MonthlySalesPoint>::new());
    let top_products = RwSignal::new(Vec::<TopProductRow>::new());
    let sellers = RwSignal::new(Vec::<SellerPerformanceRow>::new());
    let top_sale = RwSignal::new(Option::<TopSaleInfo>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move |selected: DateRange| {
        if !selected.is_valid() {
            set_error.set(Some("El rango de fechas no es válido.".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let summary_data = api::get_financial_summary(&selected).await?;
                let monthly_data = api::get_monthly_sales(&selected).await?;
                let top_products_data = api::get_top_products(&selected).await?;
                let sellers_data = api::get_sales_by_seller(&selected).await?;
                let top_sale_data = api::get_top_sale(&selected).await?;
                Ok::<_, String>((
                    summary_data,
                    monthly_data,
                    top_products_data,
                    sellers_data,
                    top_sale_data,
                ))
            }
            .await;

            match result {
                Ok((summary_data, monthly_data, top_products_data, sellers_data, top_sale_data)) => {
                    summary.set(Some(summary_data));
                    monthly.set(monthly_data);
                    top_products.set(top_products_data);
                    sellers.set(sellers_data);
                    top_sale.set(top_sale_data);
                }
                Err(e) => set_error.set(Some(format!("No se pudieron cargar los reportes: {}", e))),
            }
            set_loading.set(false);
        });
    };

    load(range.get_untracked());

    view! {
        <div class="content dashboard">
            <div class="header">
                <div>
                    <h2>{"Reportes y Estadísticas"}</h2>
                    <p class="muted">{"Analiza el rendimiento de tu negocio con filtros de fecha."}</p>
                </div>
                <DateRangePicker
                    date_from=Signal::derive(move || range.get().start.to_string())
                    date_to=Signal::derive(move || range.get().end.to_string())
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        let parsed = (
                            from.parse::<chrono::NaiveDate>(),
                            to.parse::<chrono::NaiveDate>(),
                        );
                        if let (Ok(start), Ok(end)) = parsed {
                            let selected = DateRange::new(start, end);
                            range.set(selected);
                            load(selected);
                        }
                    })
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando reportes..."</p> }>
                <div class="dashboard__stat-row">
                    <StatCard
                        label="Ingresos Totales".to_string()
                        icon_name="bar-chart".to_string()
                        value=Signal::derive(move || summary.get().map(|s| s.income))
                    />
                    <StatCard
                        label="Costos Totales (Promedio)".to_string()
                        icon_name="truck".to_string()
                        value=Signal::derive(move || summary.get().map(|s| s.costs))
                    />
                    <StatCard
                        label="Ganancias Estimadas".to_string()
                        icon_name="shopping-cart".to_string()
                        value=Signal::derive(move || summary.get().map(|s| s.profit))
                        accent="positive"
                    />
                </div>

                <div class="dashboard__grid">
                    <div class="card">
                        <div class="card__header"><h3>{"Ventas por Mes"}</h3></div>
                        <div class="card__body">
                            <Show
                                when=move || !monthly.get().is_empty()
                                fallback=|| view! { <p class="muted">"No hay datos en este período."</p> }
                            >
                                <table class="table__data">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Mes"}</th>
                                            <th class="table__header-cell">{"Total Vendido"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || monthly.get().into_iter().map(|point| view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{point.month.clone()}</td>
                                                <td class="table__cell">{format_price(point.total)}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </Show>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header"><h3>{"Top 10 Productos Vendidos"}</h3></div>
                        <div class="card__body">
                            <Show
                                when=move || !top_products.get().is_empty()
                                fallback=|| view! { <p class="muted">"No hay datos en este período."</p> }
                            >
                                <table class="table__data">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Producto"}</th>
                                            <th class="table__header-cell">{"Unidades Vendidas"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || top_products.get().into_iter().map(|row| view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.product_name.clone()}</td>
                                                <td class="table__cell">{row.units_sold}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </Show>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header"><h3>{"Rendimiento por Vendedor"}</h3></div>
                        <div class="card__body">
                            <Show
                                when=move || !sellers.get().is_empty()
                                fallback=|| view! { <p class="muted">"No hay datos en este período."</p> }
                            >
                                <table class="table__data">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Vendedor"}</th>
                                            <th class="table__header-cell">{"Total Vendido"}</th>
                                            <th class="table__header-cell">{"Cantidad de Ventas"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || sellers.get().into_iter().map(|row| view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.seller.clone()}</td>
                                                <td class="table__cell">{format_price(row.total_sold)}</td>
                                                <td class="table__cell">{row.sale_count}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </Show>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header"><h3>{"Venta Destacada (Monto Más Alto)"}</h3></div>
                        <div class="card__body">
                            {move || match top_sale.get() {
                                Some(sale) => view! {
                                    <div class="dashboard__top-sale">
                                        <p class="dashboard__top-sale-amount">
                                            {format!("${}", format_money(sale.total))}
                                        </p>
                                        <p class="muted">{format!("Vendedor: {}", sale.seller)}</p>
                                        <p class="muted">{format!("Fecha: {}", format_timestamp(sale.date))}</p>
                                        <p class="muted">{format!("ID Venta: #{}", sale.sale_id)}</p>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <p class="muted">
                                        "No se encontró una venta destacada en este período."
                                    </p>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
