pub mod client;

pub use client::{FormspreeClient, DEFAULT_RELAY_URL};
