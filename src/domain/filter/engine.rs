// src/domain/filter/engine.rs
//
// Filter Engine
//
// Pure, total functions of (catalogue, filter state). Nothing here is
// cached or stored; callers recompute after every state change.
//
// Matching rules:
// - Query: trimmed, case-insensitive substring of `name` or `itemId`
// - Facets: AND across dimensions, OR within a dimension
// - Facet values compare trimmed and case-insensitive

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::facet::Facet;
use super::state::FilterState;
use crate::domain::catalogue::Catalogue;
use crate::domain::garment::GarmentRecord;

/// Values that mark an attribute as "not applicable" and never become options
const PLACEHOLDER_VALUES: [&str; 3] = ["", "n/a", "undefined"];

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn is_placeholder(normalized: &str) -> bool {
    PLACEHOLDER_VALUES.contains(&normalized)
}

/// Filter state pre-normalized once per computation
struct Criteria {
    query: String,
    selections: Vec<(Facet, Vec<String>)>,
}

impl Criteria {
    fn from_state(state: &FilterState) -> Self {
        let selections = Facet::ALL
            .iter()
            .filter(|&&facet| !state.values(facet).is_empty())
            .map(|&facet| {
                let values = state.values(facet).iter().map(|v| normalize(v)).collect();
                (facet, values)
            })
            .collect();

        Self {
            query: normalize(&state.query),
            selections,
        }
    }

    fn matches_query(&self, record: &GarmentRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.query)
            || record.item_id.to_lowercase().contains(&self.query)
    }

    /// `skip` leaves one facet's own selection out of the test
    fn matches(&self, record: &GarmentRecord, skip: Option<Facet>) -> bool {
        if !self.matches_query(record) {
            return false;
        }

        self.selections
            .iter()
            .filter(|(facet, _)| Some(*facet) != skip)
            .all(|(facet, selected)| {
                let value = normalize(record.facet_value(*facet));
                selected.iter().any(|s| *s == value)
            })
    }
}

/// Records passing the query and every facet constraint, in catalogue order
pub fn compute_filtered_products<'a>(
    catalogue: &'a Catalogue,
    state: &FilterState,
) -> Vec<&'a GarmentRecord> {
    let criteria = Criteria::from_state(state);
    catalogue
        .iter()
        .filter(|record| criteria.matches(record, None))
        .collect()
}

/// Selectable values per facet.
///
/// Each facet's candidates are filtered by the query and every *other*
/// facet, never by its own selection. Values are deduplicated
/// case-insensitively (first spelling wins), placeholders dropped, and the
/// result sorted.
pub fn compute_facet_options(catalogue: &Catalogue, state: &FilterState) -> FacetOptions {
    let criteria = Criteria::from_state(state);

    let options = Facet::ALL
        .iter()
        .map(|&facet| {
            let mut seen = HashSet::new();
            let mut values: Vec<String> = catalogue
                .iter()
                .filter(|record| criteria.matches(record, Some(facet)))
                .map(|record| record.facet_value(facet))
                .filter(|value| {
                    let key = normalize(value);
                    !is_placeholder(&key) && seen.insert(key)
                })
                .map(str::to_string)
                .collect();
            values.sort();
            (facet, values)
        })
        .collect();

    FacetOptions { options }
}

/// Option lists for every facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetOptions {
    options: BTreeMap<Facet, Vec<String>>,
}

impl FacetOptions {
    pub fn get(&self, facet: Facet) -> &[String] {
        self.options.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> {
        self.options.iter().map(|(facet, values)| (*facet, values.as_slice()))
    }
}
