use serde::{Deserialize, Serialize};

use crate::domain::filter::Facet;

/// One physical costume piece held in the archive.
/// Records are supplied with the catalogue and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentRecord {
    /// Unique stock identifier (selection key)
    pub item_id: String,

    /// Groups several physical items under one design
    pub product_id: String,

    pub name: String,
    pub category: String,
    pub era: String,
    pub garment_type: String,
    pub size: String,
    pub gender: String,
    pub social_class: String,
    pub color: String,
    pub fabric: String,
    pub measurements: String,
    pub original_work: String,

    #[serde(default)]
    pub notes: Option<String>,

    /// Ordered image references, first one is the cover
    pub image_urls: Vec<String>,
}

impl GarmentRecord {
    /// Value of the record for a facet dimension
    pub fn facet_value(&self, facet: Facet) -> &str {
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

    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    pub fn image_count(&self) -> usize {
        self.image_urls.len()
    }
}

impl std::fmt::Display for GarmentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.item_id)
    }
}
