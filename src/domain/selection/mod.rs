//! Critical Selection Invariants:
//!
//! 1. No duplicate item ids
//! 2. Ids that no longer resolve against the catalogue are invisible, not errors
//! 3. add/remove are idempotent

pub mod entity;

pub use entity::SelectionState;
