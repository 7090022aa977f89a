// src/application/config.rs
//
// Runtime configuration, read from the environment at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::db::default_database_path;
use crate::error::AppResult;
use crate::integrations::DEFAULT_RELAY_URL;

pub const ENV_FORM_ID: &str = "ARMARIO_FORM_ID";
pub const ENV_RELAY_URL: &str = "ARMARIO_RELAY_URL";
pub const ENV_DB_PATH: &str = "ARMARIO_DB_PATH";
pub const ENV_RETURN_DELAY_MS: &str = "ARMARIO_RETURN_DELAY_MS";
pub const ENV_CATALOGUE: &str = "ARMARIO_CATALOGUE";

/// Inline notice shown on the request form when no relay id is configured
pub const MISSING_RELAY_NOTICE: &str =
    "Error técnico: ARMARIO_FORM_ID no configurado; no es posible enviar solicitudes.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Relay endpoint identity; submission is inert without it
    pub form_id: Option<String>,
    pub relay_base_url: String,
    /// None keeps state in memory for the session only
    pub storage_path: Option<PathBuf>,
    /// Pause on the confirmation before returning to the catalogue
    pub success_return_delay: Duration,
    pub relay_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form_id: None,
            relay_base_url: DEFAULT_RELAY_URL.to_string(),
            storage_path: None,
            success_return_delay: Duration::from_millis(5000),
            relay_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as absent
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let storage_path = match get(ENV_DB_PATH) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let success_return_delay = match get(ENV_RETURN_DELAY_MS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!("Ignoring invalid {}='{}'", ENV_RETURN_DELAY_MS, raw);
                    defaults.success_return_delay
                }
            },
            None => defaults.success_return_delay,
        };

        Ok(Self {
            form_id: get(ENV_FORM_ID).map(|id| id.trim().to_string()),
            relay_base_url: get(ENV_RELAY_URL).unwrap_or(defaults.relay_base_url),
            storage_path: Some(storage_path),
            success_return_delay,
            relay_timeout: defaults.relay_timeout,
        })
    }

    pub fn relay_configured(&self) -> bool {
        self.form_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_values_from_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_FORM_ID, " xyzabc "),
            (ENV_DB_PATH, "/tmp/armario-test.db"),
            (ENV_RETURN_DELAY_MS, "250"),
        ]))
        .unwrap();

        assert_eq!(config.form_id.as_deref(), Some("xyzabc"));
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/armario-test.db")));
        assert_eq!(config.success_return_delay, Duration::from_millis(250));
        assert_eq!(config.relay_base_url, DEFAULT_RELAY_URL);
    }

    #[test]
    fn test_blank_form_id_is_absent() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_FORM_ID, "   "),
            (ENV_DB_PATH, "/tmp/armario-test.db"),
        ]))
        .unwrap();
        assert!(!config.relay_configured());
    }

    #[test]
    fn test_invalid_delay_uses_default() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_RETURN_DELAY_MS, "soon"),
            (ENV_DB_PATH, "/tmp/armario-test.db"),
        ]))
        .unwrap();
        assert_eq!(config.success_return_delay, Duration::from_millis(5000));
    }
}
