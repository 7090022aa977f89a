use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::domain::garment::{validate_garment, GarmentRecord};
use crate::domain::{DomainError, DomainResult};

/// The read-only, ordered collection of garments for a session.
///
/// Construction validates every record and the uniqueness of `itemId`;
/// after that the catalogue is never mutated or refetched.
#[derive(Debug, Clone)]
pub struct Catalogue {
    records: Vec<GarmentRecord>,
    index: HashMap<String, usize>,
    fingerprint: String,
}

impl Catalogue {
    /// Build a catalogue, preserving record order
    pub fn new(records: Vec<GarmentRecord>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            validate_garment(record)?;
            if index.insert(record.item_id.clone(), position).is_some() {
                return Err(DomainError::DuplicateItemId(record.item_id.clone()));
            }
        }

        let fingerprint = Self::compute_fingerprint(&records);

        Ok(Self {
            records,
            index,
            fingerprint,
        })
    }

    /// Parse the bundled dataset (a JSON array of camelCase records)
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let records: Vec<GarmentRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::MalformedCatalogue(e.to_string()))?;
        Self::new(records)
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            fingerprint: Self::compute_fingerprint(&[]),
        }
    }

    pub fn records(&self) -> &[GarmentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GarmentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, item_id: &str) -> Option<&GarmentRecord> {
        self.index.get(item_id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.index.contains_key(item_id)
    }

    /// SHA-256 over the ordered item ids; identifies this catalogue version
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn compute_fingerprint(records: &[GarmentRecord]) -> String {
        let mut hasher = Sha256::new();
        for record in records {
            hasher.update(record.item_id.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a GarmentRecord;
    type IntoIter = std::slice::Iter<'a, GarmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
