// src/integrations/mod.rs
//
// External Integrations Module

pub mod form_relay;
pub mod formspree;

pub use form_relay::{FormRelay, RelayOutcome};
pub use formspree::{FormspreeClient, DEFAULT_RELAY_URL};

#[cfg(test)]
pub use form_relay::MockFormRelay;
