// src/services/mod.rs
//
// Services Module - State managers and the submission boundary

pub mod filter_state_service;
pub mod selection_service;
pub mod submission_service;

pub use filter_state_service::FilterStateService;
pub use selection_service::SelectionService;
pub use submission_service::{SubmissionService, SubmissionStatus};
