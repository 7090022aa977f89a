//! Critical Catalogue Invariants:
//!
//! 1. itemId is unique across the catalogue
//! 2. Record order is the order supplied by the dataset
//! 3. The catalogue is immutable for the session
//! 4. Every record passes garment validation

pub mod entity;

pub use entity::Catalogue;
