use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::facet::Facet;

/// Active filter selections plus the free-text query.
///
/// An empty set for a facet means "no constraint on that facet".
/// Missing members in stored data deserialize to their empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub category: BTreeSet<String>,
    pub era: BTreeSet<String>,
    pub garment_type: BTreeSet<String>,
    pub size: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub social_class: BTreeSet<String>,
    pub color: BTreeSet<String>,
    pub query: String,
}

impl FilterState {
    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Category => &self.category,
            Facet::Era => &self.era,
            Facet::GarmentType => &self.garment_type,
            Facet::Size => &self.size,
            Facet::Gender => &self.gender,
            Facet::SocialClass => &self.social_class,
            Facet::Color => &self.color,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Category => &mut self.category,
            Facet::Era => &mut self.era,
            Facet::GarmentType => &mut self.garment_type,
            Facet::Size => &mut self.size,
            Facet::Gender => &mut self.gender,
            Facet::SocialClass => &mut self.social_class,
            Facet::Color => &mut self.color,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).contains(value)
    }

    /// Flip membership of `value` in `facet`.
    /// Returns true if the value is selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let values = self.values_mut(facet);
        if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        }
    }

    /// Stored verbatim; trimming happens at match time
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of selected values across all facets
    pub fn active_value_count(&self) -> usize {
        Facet::ALL.iter().map(|&f| self.values(f).len()).sum()
    }
}
