// src/integrations/formspree/client.rs
//
// Formspree form relay client
//
// ARCHITECTURE:
// - Posts a LoanRequest as JSON to {base_url}/{form_id}
// - Maps relay validation errors → FieldError (NO domain mutation)
// - Used by SubmissionService through the FormRelay trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches selection or view state

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{FieldError, LoanRequest};
use crate::error::{AppError, AppResult};
use crate::integrations::form_relay::{FormRelay, RelayOutcome};

pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f";

/// Relay error body. Formspree sends either a list of field errors or a
/// single message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    field: Option<String>,
    message: String,
}

pub struct FormspreeClient {
    base_url: String,
    form_id: String,
    http_client: Client,
}

impl FormspreeClient {
    pub fn new(base_url: &str, form_id: &str, timeout: Duration) -> AppResult<Self> {
        let form_id = form_id.trim();
        if form_id.is_empty() {
            return Err(AppError::Config("Form relay id is empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            form_id: form_id.to_string(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.form_id)
    }

    /// Turn a refusal body into field errors; falls back to one general
    /// message naming the status when the body is not understood
    fn parse_rejection(status: StatusCode, body: &str) -> Vec<FieldError> {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.errors.is_empty() => parsed
                .errors
                .into_iter()
                .map(|entry| FieldError {
                    field: entry.field,
                    message: entry.message,
                })
                .collect(),
            Ok(ErrorBody {
                error: Some(message),
                ..
            }) => vec![FieldError::general(message)],
            _ => vec![FieldError::general(format!(
                "Form relay refused the request ({})",
                status
            ))],
        }
    }
}

#[async_trait]
impl FormRelay for FormspreeClient {
    async fn submit(&self, request: &LoanRequest) -> AppResult<RelayOutcome> {
        let response = self
            .http_client
            .post(self.endpoint())
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Relay(format!("Form relay request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Form relay accepted request '{}'", request.subject);
            return Ok(RelayOutcome::Accepted);
        }

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            let errors = Self::parse_rejection(status, &body);
            log::warn!("Form relay rejected request: {} field errors", errors.len());
            return Ok(RelayOutcome::Rejected(errors));
        }

        Err(AppError::Relay(format!(
            "Form relay returned status: {}",
            status
        )))
    }
}
