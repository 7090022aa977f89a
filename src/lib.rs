// src/lib.rs
// Armario - filtering and selection engine for a costume-archive storefront
//
// Architecture:
// - Domain-centric: filter engine, selection and request payload are pure
// - Event-driven: state managers announce every mutation on the EventBus
// - Explicit: storage is injected, never ambient
// - Local-first: filters and selection survive restarts
// - Application Layer: view machine and render DTOs

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    build_item_summary,
    compute_facet_options,
    compute_filtered_products,
    validate_contact,
    validate_garment,
    // Catalogue
    Catalogue,
    // Request
    ContactDetails,
    DomainError,
    DomainResult,
    // Filters
    Facet,
    FacetOptions,
    FieldError,
    FilterState,
    // Garment
    GarmentRecord,
    LoanRequest,
    // Selection
    SelectionState,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent,
    EventBus,
    EventLogEntry,
    // Filters
    FacetValueToggled,
    FiltersCleared,
    SearchQueryChanged,
    // Selection
    SelectionCleared,
    SelectionItemAdded,
    SelectionItemRemoved,
    // View & submission
    SubmissionStatusChanged,
    ViewChanged,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{
    FilterStateStore, InMemoryStateRepository, SelectionStore, SqliteStateRepository,
    StateRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{FilterStateService, SelectionService, SubmissionService, SubmissionStatus};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{build_coordinator, AppConfig, ArmarioCoordinator, View};

pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{FormRelay, FormspreeClient, RelayOutcome};
