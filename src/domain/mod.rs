// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalogue;
pub mod filter;
pub mod garment;
pub mod request;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixtures;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Garment Domain
pub use garment::{validate_garment, GarmentRecord};

// Catalogue Domain
pub use catalogue::Catalogue;

// Filter Domain (state + engine)
pub use filter::{
    compute_facet_options, compute_filtered_products, Facet, FacetOptions, FilterState,
};

// Selection Domain
pub use selection::SelectionState;

// Request Domain
pub use request::{
    build_item_summary, validate_contact, ContactDetails, FieldError, LoanRequest,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate itemId in catalogue: {0}")]
    DuplicateItemId(String),

    #[error("Malformed catalogue data: {0}")]
    MalformedCatalogue(String),

    #[error("Unknown facet: {0}")]
    UnknownFacet(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
