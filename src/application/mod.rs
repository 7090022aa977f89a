// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above domain, repositories and services
// - Owns the view machine and the render-facing DTOs
// - Translates errors into inline UI notices

pub mod bootstrap;
pub mod config;
pub mod coordinator;
pub mod dto;
pub mod error_handling;
pub mod view_cache;

pub use bootstrap::{build_coordinator, load_catalogue};
pub use config::{AppConfig, MISSING_RELAY_NOTICE};
pub use coordinator::{ArmarioCoordinator, DetailOverlay, View};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use view_cache::{DerivedView, DerivedViewCache};
