// src/services/filter_state_service.rs
//
// Filter State Manager
//
// Owns the active FilterState. Every mutation writes the full record to
// storage and emits the matching event. Storage failures are logged and
// never surface; the in-memory state stays authoritative.

use std::sync::Arc;

use crate::domain::{Facet, FilterState};
use crate::events::{EventBus, FacetValueToggled, FiltersCleared, SearchQueryChanged};
use crate::repositories::FilterStateStore;

pub struct FilterStateService {
    state: FilterState,
    store: FilterStateStore,
    event_bus: Arc<EventBus>,
}

impl FilterStateService {
    /// Starts from the stored filters (or the default when none are usable)
    pub fn new(store: FilterStateStore, event_bus: Arc<EventBus>) -> Self {
        let state = store.load();
        log::debug!(
            "Loaded filters: {} active values, query '{}'",
            state.active_value_count(),
            state.query
        );

        Self {
            state,
            store,
            event_bus,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Add `value` to `facet` if absent, remove it otherwise.
    /// Returns true if the value is selected afterwards.
    pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) -> bool {
        let selected = self.state.toggle(facet, value);
        self.persist();
        self.event_bus
            .emit(FacetValueToggled::new(facet, value.to_string(), selected));
        selected
    }

    /// Replaces the query verbatim
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.set_query(text);
        self.persist();
        self.event_bus.emit(SearchQueryChanged::new(self.state.query.clone()));
    }

    /// Back to the exact default state
    pub fn clear_all(&mut self) {
        self.state.reset();
        self.persist();
        self.event_bus.emit(FiltersCleared::new());
    }

    /// Deselects every value of one facet, one toggle at a time.
    /// Observers see one toggle event (and one storage write) per value.
    pub fn clear_facet(&mut self, facet: Facet) -> usize {
        let selected: Vec<String> = self.state.values(facet).iter().cloned().collect();
        for value in &selected {
            self.toggle_facet_value(facet, value);
        }
        selected.len()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            log::warn!("Could not persist filters: {}", e);
        }
    }
}
