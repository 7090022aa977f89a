// src/services/selection_service.rs
//
// Selection State Manager - the visitor's "armario"

use std::sync::Arc;

use crate::domain::{Catalogue, GarmentRecord, SelectionState};
use crate::events::{EventBus, SelectionCleared, SelectionItemAdded, SelectionItemRemoved};
use crate::repositories::SelectionStore;

pub struct SelectionService {
    selection: SelectionState,
    store: SelectionStore,
    event_bus: Arc<EventBus>,
}

impl SelectionService {
    pub fn new(store: SelectionStore, event_bus: Arc<EventBus>) -> Self {
        let selection = store.load();
        log::debug!("Loaded selection with {} stored ids", selection.len());

        Self {
            selection,
            store,
            event_bus,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.selection.contains(item_id)
    }

    /// Inserts if absent. Returns false (and changes nothing) otherwise.
    pub fn add(&mut self, item_id: &str) -> bool {
        let added = self.selection.add(item_id);
        self.persist();
        if added {
            self.event_bus.emit(SelectionItemAdded::new(
                item_id.to_string(),
                self.selection.len(),
            ));
        }
        added
    }

    pub fn remove(&mut self, item_id: &str) -> bool {
        let removed = self.selection.remove(item_id);
        self.persist();
        if removed {
            self.event_bus.emit(SelectionItemRemoved::new(
                item_id.to_string(),
                self.selection.len(),
            ));
        }
        removed
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.selection.clear();
        self.persist();
        self.event_bus.emit(SelectionCleared::new(removed));
        removed
    }

    /// Catalogue records for the selection, stale ids dropped
    pub fn resolve<'a>(&self, catalogue: &'a Catalogue) -> Vec<&'a GarmentRecord> {
        self.selection.resolve(catalogue)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.selection) {
            log::warn!("Could not persist selection: {}", e);
        }
    }
}
