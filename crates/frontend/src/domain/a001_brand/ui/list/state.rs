use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct BrandListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for BrandListState {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<BrandListState> {
    RwSignal::new(BrandListState::default())
}
