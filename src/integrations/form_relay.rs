// src/integrations/form_relay.rs
//
// The third-party form relay seam. The core hands it a payload and only
// reacts to the outcome.

use async_trait::async_trait;

use crate::domain::{FieldError, LoanRequest};
use crate::error::AppResult;

/// What the relay said about a delivered request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Accepted,
    /// Validation messages to show next to the offending fields
    Rejected(Vec<FieldError>),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver one request. Transport failures are errors; a relay-side
    /// validation refusal is `Ok(RelayOutcome::Rejected)`.
    async fn submit(&self, request: &LoanRequest) -> AppResult<RelayOutcome>;
}
