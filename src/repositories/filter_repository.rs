// src/repositories/filter_repository.rs

use std::sync::Arc;

use super::state_repository::{load_json, save_json, StateRepository};
use crate::domain::FilterState;
use crate::error::AppResult;

pub const FILTERS_STORAGE_KEY: &str = "armario.activeFilters";

/// Durable home of the active filter record
pub struct FilterStateStore {
    repo: Arc<dyn StateRepository>,
}

impl FilterStateStore {
    pub fn new(repo: Arc<dyn StateRepository>) -> Self {
        Self { repo }
    }

    /// Stored filters, or the all-empty default when absent or unreadable
    pub fn load(&self) -> FilterState {
        load_json(self.repo.as_ref(), FILTERS_STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self, state: &FilterState) -> AppResult<()> {
        save_json(self.repo.as_ref(), FILTERS_STORAGE_KEY, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Facet;
    use crate::repositories::InMemoryStateRepository;

    #[test]
    fn test_round_trip() {
        let store = FilterStateStore::new(Arc::new(InMemoryStateRepository::new()));
        let mut state = FilterState::default();
        state.toggle(Facet::Era, "Siglo XIX");
        state.set_query(" capa");

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_corrupt_record_falls_back_to_default() {
        let repo = Arc::new(InMemoryStateRepository::new());
        repo.save(FILTERS_STORAGE_KEY, r#"{"category": 5}"#).unwrap();

        let store = FilterStateStore::new(repo);
        assert!(store.load().is_default());
    }
}
