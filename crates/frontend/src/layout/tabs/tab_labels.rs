/// Human-readable tab title for a given key. Fallback: the key itself is
/// returned by the registry for unknown keys, so this stays total.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_financial_summary" => "Panel Financiero",

        "a001_brand" => "Marcas",
        "a002_product_line" => "Líneas",
        "a003_supplier" => "Proveedores",
        "a004_product" => "Productos",

        "a005_sale" => "Ventas",
        "a005_sale_new" => "Nueva Venta",

        _ => "…",
    }
}

/// Title of a parameterised sale-edit tab.
pub fn sale_edit_tab_label(sale_id: i32) -> String {
    format!("Editar Venta #{}", sale_id)
}

/// Title for any key, including parameterised ones. Used when a tab is
/// restored from the `?active=` URL parameter.
pub fn title_for_key(key: &str) -> String {
    if let Some(raw_id) = key.strip_prefix("a005_sale_edit_") {
        if let Ok(id) = raw_id.parse::<i32>() {
            return sale_edit_tab_label(id);
        }
    }
    tab_label_for_key(key).to_string()
}
