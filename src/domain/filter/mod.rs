//! Critical Filter Invariants:
//!
//! 1. An empty facet set means "no constraint", never "exclude all"
//! 2. Facets combine with AND, values within a facet with OR
//! 3. A facet's option list never depends on its own selection
//! 4. Derived outputs are recomputed, never stored

pub mod engine;
pub mod facet;
pub mod state;

pub use engine::{compute_facet_options, compute_filtered_products, FacetOptions};
pub use facet::Facet;
pub use state::FilterState;
