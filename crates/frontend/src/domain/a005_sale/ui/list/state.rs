use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SaleListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SaleListState {
    fn default() -> Self {
        // Newest sales first
        Self {
            sort_field: "date".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<SaleListState> {
    RwSignal::new(SaleListState::default())
}
