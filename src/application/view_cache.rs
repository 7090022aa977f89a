// src/application/view_cache.rs
//
// Memo for the Filter Engine outputs.
//
// The key is a SHA-256 over the catalogue fingerprint and the serialized
// filter state, so any state mutation produces a different key. Only the
// most recent entry is kept.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::domain::{compute_facet_options, compute_filtered_products, Catalogue, FacetOptions, FilterState};

/// Filter Engine outputs for one (catalogue, filter state) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Ids of the filtered products, in catalogue order
    pub item_ids: Vec<String>,
    pub options: FacetOptions,
}

impl DerivedView {
    pub fn compute(catalogue: &Catalogue, state: &FilterState) -> Self {
        Self {
            item_ids: compute_filtered_products(catalogue, state)
                .into_iter()
                .map(|record| record.item_id.clone())
                .collect(),
            options: compute_facet_options(catalogue, state),
        }
    }

    pub fn result_count(&self) -> usize {
        self.item_ids.len()
    }
}

#[derive(Debug, Default)]
pub struct DerivedViewCache {
    entry: Option<(String, Arc<DerivedView>)>,
    hits: u64,
    misses: u64,
}

impl DerivedViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, catalogue: &Catalogue, state: &FilterState) -> Arc<DerivedView> {
        let Some(key) = cache_key(catalogue, state) else {
            return Arc::new(DerivedView::compute(catalogue, state));
        };

        if let Some((cached_key, view)) = &self.entry {
            if *cached_key == key {
                self.hits += 1;
                return Arc::clone(view);
            }
        }

        self.misses += 1;
        let view = Arc::new(DerivedView::compute(catalogue, state));
        self.entry = Some((key, Arc::clone(&view)));
        view
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn cache_key(catalogue: &Catalogue, state: &FilterState) -> Option<String> {
    let serialized = match serde_json::to_string(state) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Filter state not serializable, skipping view cache: {}", e);
            return None;
        }
    };

    let mut hasher = Sha256::new();
    hasher.update(catalogue.fingerprint().as_bytes());
    hasher.update(b"\n");
    hasher.update(serialized.as_bytes());

    Some(format!("{:x}", hasher.finalize()))
}
