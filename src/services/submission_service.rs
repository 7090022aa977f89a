// src/services/submission_service.rs
//
// Request submission - the only asynchronous boundary.
//
// CRITICAL RULES:
// - idle → submitting → succeeded | failed
// - While submitting, further submissions are refused (not queued)
// - No cancellation once dispatched
// - The status lock is never held across an await

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::domain::{FieldError, LoanRequest};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SubmissionStatusChanged};
use crate::integrations::{FormRelay, RelayOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed { errors: Vec<FieldError> },
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Succeeded => "succeeded",
            SubmissionStatus::Failed { .. } => "failed",
        }
    }

    /// Messages for one form field (None = form-level messages)
    pub fn errors_for(&self, field: Option<&str>) -> Vec<&str> {
        match self {
            SubmissionStatus::Failed { errors } => errors
                .iter()
                .filter(|e| e.field.as_deref() == field)
                .map(|e| e.message.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

pub struct SubmissionService {
    relay: Option<Arc<dyn FormRelay>>,
    status: Mutex<SubmissionStatus>,
    event_bus: Arc<EventBus>,
}

impl SubmissionService {
    /// `relay` is None when the relay endpoint identity is not configured
    pub fn new(relay: Option<Arc<dyn FormRelay>>, event_bus: Arc<EventBus>) -> Self {
        Self {
            relay,
            status: Mutex::new(SubmissionStatus::Idle),
            event_bus,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == SubmissionStatus::Submitting
    }

    /// Dispatch one request and wait for the relay's verdict.
    ///
    /// Returns the status reached. A call made while another submission is
    /// in flight dispatches nothing and reports `Submitting`.
    pub async fn submit(&self, request: LoanRequest, item_count: usize) -> AppResult<SubmissionStatus> {
        let relay = self
            .relay
            .as_ref()
            .ok_or_else(|| AppError::Config("Form relay is not configured".to_string()))?;

        {
            let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
            if *status == SubmissionStatus::Submitting {
                log::warn!("Submission already in progress; ignoring duplicate");
                return Ok(SubmissionStatus::Submitting);
            }
            *status = SubmissionStatus::Submitting;
        }
        self.announce(&SubmissionStatus::Submitting, item_count);

        let outcome = match relay.submit(&request).await {
            Ok(RelayOutcome::Accepted) => SubmissionStatus::Succeeded,
            Ok(RelayOutcome::Rejected(errors)) => SubmissionStatus::Failed { errors },
            Err(e) => {
                log::error!("Request submission failed: {}", e);
                SubmissionStatus::Failed {
                    errors: vec![FieldError::general(e.to_string())],
                }
            }
        };

        self.set_status(outcome.clone(), item_count);
        Ok(outcome)
    }

    /// Record a refusal found before dispatch (local validation)
    pub fn reject(&self, errors: Vec<FieldError>, item_count: usize) -> SubmissionStatus {
        let status = SubmissionStatus::Failed { errors };
        self.set_status(status.clone(), item_count);
        status
    }

    /// Back to idle (form left or success acknowledged)
    pub fn reset(&self) {
        if self.status() != SubmissionStatus::Idle {
            self.set_status(SubmissionStatus::Idle, 0);
        }
    }

    fn set_status(&self, next: SubmissionStatus, item_count: usize) {
        {
            let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
            *status = next.clone();
        }
        self.announce(&next, item_count);
    }

    fn announce(&self, status: &SubmissionStatus, item_count: usize) {
        log::info!("Submission status: {}", status.as_str());
        self.event_bus
            .emit(SubmissionStatusChanged::new(status.as_str().to_string(), item_count));
    }
}
