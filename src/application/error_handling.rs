// src/application/error_handling.rs
//
// Error mapping for the presentation layer
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    DomainError,
    /// Local storage (never fatal, shown only if a caller chooses to)
    Storage,
    /// Form relay unreachable or failing
    ExternalService,
    /// Missing relay id or similar precondition
    Configuration,
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Database(_) | AppError::Pool(_) | AppError::Io(_) => {
                log::error!("Storage error: {}", error);
                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Local storage operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Relay(message) => {
                log::warn!("Form relay error: {}", message);
                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "The request could not be delivered".to_string(),
                    details: Some(message),
                }
            }

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message,
                details: None,
            },

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// One-line notice: the message, then the details when there are any
    pub fn notice(&self) -> String {
        match &self.details {
            Some(details) => format!("{} ({})", self.message, details),
            None => self.message.clone(),
        }
    }
}
