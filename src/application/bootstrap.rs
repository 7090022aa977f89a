// src/application/bootstrap.rs
//
// Wiring: storage → repositories → services → coordinator.

use std::path::Path;
use std::sync::Arc;

use crate::application::config::AppConfig;
use crate::application::coordinator::ArmarioCoordinator;
use crate::db::create_connection_pool;
use crate::domain::Catalogue;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{FormRelay, FormspreeClient};
use crate::repositories::{
    FilterStateStore, InMemoryStateRepository, SelectionStore, SqliteStateRepository,
    StateRepository,
};
use crate::services::{FilterStateService, SelectionService, SubmissionService};

/// Read and validate the catalogue JSON file
pub fn load_catalogue(path: &Path) -> AppResult<Catalogue> {
    let json = std::fs::read_to_string(path)?;
    let catalogue = Catalogue::from_json(&json)?;
    log::info!("Catalogue loaded from {}: {} garments", path.display(), catalogue.len());
    Ok(catalogue)
}

/// Keyed-record storage for the configured path, or memory when none is set
pub fn open_state_repository(config: &AppConfig) -> AppResult<Arc<dyn StateRepository>> {
    match &config.storage_path {
        Some(path) => {
            log::info!("Opening state storage at {}", path.display());
            let pool = Arc::new(create_connection_pool(path)?);
            Ok(Arc::new(SqliteStateRepository::new(pool)?))
        }
        None => {
            log::info!("No storage path configured; state lasts for this session only");
            Ok(Arc::new(InMemoryStateRepository::new()))
        }
    }
}

/// Relay client when a form id is configured
pub fn build_form_relay(config: &AppConfig) -> AppResult<Option<Arc<dyn FormRelay>>> {
    let Some(form_id) = config.form_id.as_deref() else {
        log::warn!("Form relay id not configured; request submission disabled");
        return Ok(None);
    };

    let client = FormspreeClient::new(&config.relay_base_url, form_id, config.relay_timeout)?;
    log::info!("Form relay endpoint: {}", client.endpoint());
    Ok(Some(Arc::new(client)))
}

pub fn build_coordinator(config: &AppConfig, catalogue: Arc<Catalogue>) -> AppResult<ArmarioCoordinator> {
    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    let repository = open_state_repository(config)?;

    // 2. STATE MANAGERS (stored state is read once, here)
    let filters = FilterStateService::new(
        FilterStateStore::new(Arc::clone(&repository)),
        Arc::clone(&event_bus),
    );
    let selection = SelectionService::new(SelectionStore::new(repository), Arc::clone(&event_bus));

    // 3. SUBMISSION
    let submission = Arc::new(SubmissionService::new(
        build_form_relay(config)?,
        Arc::clone(&event_bus),
    ));

    Ok(ArmarioCoordinator::new(
        catalogue,
        filters,
        selection,
        submission,
        event_bus,
        config.success_return_delay,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::coordinator::View;
    use crate::application::error_handling::{ErrorResponse, ErrorType};
    use crate::domain::fixtures::sample_catalogue;
    use crate::domain::Facet;
    use tempfile::TempDir;

    fn config_at(dir: &TempDir) -> AppConfig {
        AppConfig {
            storage_path: Some(dir.path().join("state").join("armario.db")),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = TempDir::new().unwrap();
        let config = config_at(&dir);
        let catalogue = Arc::new(sample_catalogue());

        {
            let mut coordinator = build_coordinator(&config, Arc::clone(&catalogue)).unwrap();
            coordinator.toggle_facet_value(Facet::Color, "Rojo");
            coordinator.set_query("  capa ");
            coordinator.add_to_selection("002");
        }

        let coordinator = build_coordinator(&config, catalogue).unwrap();

        assert!(coordinator.filter_state().is_selected(Facet::Color, "Rojo"));
        assert_eq!(coordinator.filter_state().query, "  capa ");
        assert!(coordinator.is_selected("002"));
        assert_eq!(coordinator.view(), View::Catalogue);
        let ids: Vec<&str> = coordinator
            .filtered_products()
            .iter()
            .map(|r| r.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["001"]);
    }

    #[test]
    fn test_load_catalogue_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogue.json");
        let records: Vec<_> = sample_catalogue().records().to_vec();
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let catalogue = load_catalogue(&path).unwrap();
        assert_eq!(catalogue.len(), 5);
        assert_eq!(catalogue.fingerprint(), sample_catalogue().fingerprint());
    }

    #[test]
    fn test_bad_catalogue_maps_to_notice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogue.json");
        std::fs::write(&path, r#"{"not": "a list"}"#).unwrap();

        let response = ErrorResponse::from_app_error(load_catalogue(&path).unwrap_err());
        assert_eq!(response.error_type, ErrorType::DomainError);
        assert!(response.notice().starts_with("Domain validation failed ("));

        let missing = load_catalogue(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(ErrorResponse::from_app_error(missing).error_type, ErrorType::Storage);
    }

    #[test]
    fn test_memory_storage_without_path() {
        let repository = open_state_repository(&AppConfig::default()).unwrap();
        repository.save("k", "\"v\"").unwrap();
        assert_eq!(repository.load("k").unwrap().as_deref(), Some("\"v\""));
    }

    #[test]
    fn test_relay_only_with_form_id() {
        assert!(build_form_relay(&AppConfig::default()).unwrap().is_none());

        let config = AppConfig {
            form_id: Some("xyzabc".to_string()),
            ..AppConfig::default()
        };
        assert!(build_form_relay(&config).unwrap().is_some());

        let coordinator = build_coordinator(&config, Arc::new(sample_catalogue())).unwrap();
        assert!(coordinator.configuration_notice().is_none());
    }
}
