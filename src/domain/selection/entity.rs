use serde::{Deserialize, Serialize};

use crate::domain::catalogue::Catalogue;
use crate::domain::garment::GarmentRecord;

/// The visitor's "armario": chosen item ids, in the order they were added.
///
/// Stored as a plain JSON array of ids. Duplicates in stored data are
/// collapsed on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionState {
    item_ids: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, dropping repeats
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new();
        for id in ids {
            state.add(id);
        }
        state
    }

    /// Returns false if the id was already present
    pub fn add(&mut self, item_id: impl Into<String>) -> bool {
        let item_id = item_id.into();
        if self.contains(&item_id) {
            return false;
        }
        self.item_ids.push(item_id);
        true
    }

    /// Returns false if the id was not present
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.item_ids.len();
        self.item_ids.retain(|id| id != item_id);
        self.item_ids.len() != before
    }

    /// Empties the selection, returning how many ids were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.item_ids.len();
        self.item_ids.clear();
        removed
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.item_ids.iter().any(|id| id == item_id)
    }

    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    /// Catalogue records for the stored ids; stale ids are skipped silently
    pub fn resolve<'a>(&self, catalogue: &'a Catalogue) -> Vec<&'a GarmentRecord> {
        self.item_ids
            .iter()
            .filter_map(|id| catalogue.get(id))
            .collect()
    }
}

impl<'de> Deserialize<'de> for SelectionState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ids = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_ids(ids))
    }
}
