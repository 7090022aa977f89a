use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A filterable descriptive dimension of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Category,
    Era,
    GarmentType,
    Size,
    Gender,
    SocialClass,
    Color,
}

impl Facet {
    /// Every facet, in display order
    pub const ALL: [Facet; 7] = [
        Facet::Category,
        Facet::Era,
        Facet::GarmentType,
        Facet::Size,
        Facet::Gender,
        Facet::SocialClass,
        Facet::Color,
    ];

    /// Storage / wire key
    pub fn key(self) -> &'static str {
        match self {
            Facet::Category => "category",
            Facet::Era => "era",
            Facet::GarmentType => "garmentType",
            Facet::Size => "size",
            Facet::Gender => "gender",
            Facet::SocialClass => "socialClass",
            Facet::Color => "color",
        }
    }

    /// Label shown above the facet control
    pub fn label(self) -> &'static str {
        match self {
            Facet::Category => "Categoría",
            Facet::Era => "Época",
            Facet::GarmentType => "Tipo de Prenda",
            Facet::Size => "Talla",
            Facet::Gender => "Género",
            Facet::SocialClass => "Clase Social",
            Facet::Color => "Color",
        }
    }
}

impl FromStr for Facet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.key() == s)
            .ok_or_else(|| DomainError::UnknownFacet(s.to_string()))
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
