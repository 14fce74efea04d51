use crate::location::{all_cities, City};

pub struct AppState {
    pub cities: &'static [City],
}

impl Default for AppState {
    fn default() -> Self {
        Self { cities: all_cities() }
    }
}
