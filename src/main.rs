// src/main.rs
//
// Bootstrap: load configuration and the catalogue, restore stored state,
// and print what the storefront would render.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use armario::application::config::ENV_CATALOGUE;
use armario::application::{build_coordinator, load_catalogue, AppConfig, ErrorResponse};
use armario::domain::Catalogue;
use armario::AppError;

/// Turn a library error into the same notice the UI would show
fn user_facing(error: AppError) -> anyhow::Error {
    anyhow::anyhow!(ErrorResponse::from_app_error(error).notice())
}

fn main() -> anyhow::Result<()> {
    // 1. LOGGING (bridges `log` records from the library)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 2. CONFIGURATION
    let config = AppConfig::from_env()
        .map_err(user_facing)
        .context("Failed to read configuration")?;

    // 3. CATALOGUE
    let catalogue = match std::env::var(ENV_CATALOGUE) {
        Ok(path) if !path.trim().is_empty() => {
            let path = Path::new(path.trim());
            load_catalogue(path)
                .map_err(user_facing)
                .with_context(|| format!("Failed to load catalogue at {}", path.display()))?
        }
        _ => {
            log::warn!("{} not set; starting with an empty catalogue", ENV_CATALOGUE);
            Catalogue::empty()
        }
    };

    // 4. STATE
    let mut coordinator = build_coordinator(&config, Arc::new(catalogue)).map_err(user_facing)?;

    // 5. SUMMARY
    let view = coordinator.catalogue_view();
    println!("{} artículos encontrados", view.result_count);
    if !view.query.is_empty() {
        println!("Búsqueda: \"{}\"", view.query);
    }
    for group in &view.facets {
        let options: Vec<String> = group
            .options
            .iter()
            .map(|o| if o.selected { format!("[{}]", o.value) } else { o.value.clone() })
            .collect();
        println!("{}: {}", group.label, options.join(", "));
    }
    println!("Armario: {} prendas", view.selection_count);
    if let Some(notice) = coordinator.configuration_notice() {
        println!("{}", notice);
    }

    Ok(())
}
