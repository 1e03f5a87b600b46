use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductLineListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProductLineListState {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<ProductLineListState> {
    RwSignal::new(ProductLineListState::default())
}
