// src/repositories/selection_repository.rs

use std::sync::Arc;

use super::state_repository::{load_json, save_json, StateRepository};
use crate::domain::SelectionState;
use crate::error::AppResult;

pub const SELECTION_STORAGE_KEY: &str = "armario.selection";

/// Durable home of the selection record (a JSON array of item ids)
pub struct SelectionStore {
    repo: Arc<dyn StateRepository>,
}

impl SelectionStore {
    pub fn new(repo: Arc<dyn StateRepository>) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> SelectionState {
        load_json(self.repo.as_ref(), SELECTION_STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self, selection: &SelectionState) -> AppResult<()> {
        save_json(self.repo.as_ref(), SELECTION_STORAGE_KEY, selection)
    }
}
