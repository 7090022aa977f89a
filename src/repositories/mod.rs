// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - Read failures degrade to defaults; they never reach the user

pub mod filter_repository;
pub mod selection_repository;
pub mod state_repository;

pub use filter_repository::{FilterStateStore, FILTERS_STORAGE_KEY};
pub use selection_repository::{SelectionStore, SELECTION_STORAGE_KEY};
pub use state_repository::{InMemoryStateRepository, SqliteStateRepository, StateRepository};
