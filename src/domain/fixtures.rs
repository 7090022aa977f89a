// Test fixtures shared by the domain, service and application tests

use super::catalogue::Catalogue;
use super::filter::Facet;
use super::garment::GarmentRecord;

pub fn garment(item_id: &str, name: &str) -> GarmentRecord {
    GarmentRecord {
        item_id: item_id.to_string(),
        product_id: format!("P-{}", item_id),
        name: name.to_string(),
        category: "Capa".to_string(),
        era: "Siglo XVIII".to_string(),
        garment_type: "Abrigo".to_string(),
        size: "M".to_string(),
        gender: "Unisex".to_string(),
        social_class: "Nobleza".to_string(),
        color: "Negro".to_string(),
        fabric: "Lana".to_string(),
        measurements: String::new(),
        original_work: String::new(),
        notes: None,
        image_urls: vec![format!("/img/{}.jpg", item_id)],
    }
}

pub fn garment_with(item_id: &str, name: &str, facets: &[(Facet, &str)]) -> GarmentRecord {
    let mut record = garment(item_id, name);
    for (facet, value) in facets {
        let value = value.to_string();
        match facet {
            Facet::Category => record.category = value,
            Facet::Era => record.era = value,
            Facet::GarmentType => record.garment_type = value,
            Facet::Size => record.size = value,
            Facet::Gender => record.gender = value,
            Facet::SocialClass => record.social_class = value,
            Facet::Color => record.color = value,
        }
    }
    record
}

/// Five garments across three categories
pub fn sample_catalogue() -> Catalogue {
    let row = |id: &str, name: &str, category: &str, color: &str, era: &str, gender: &str, size: &str| {
        garment_with(
            id,
            name,
            &[
                (Facet::Category, category),
                (Facet::Color, color),
                (Facet::Era, era),
                (Facet::Gender, gender),
                (Facet::Size, size),
            ],
        )
    };

    Catalogue::new(vec![
        row("001", "Capa de terciopelo", "Capa", "Rojo", "Siglo XVIII", "Hombre", "M"),
        row("002", "Casaca bordada", "Casaca", "Rojo", "Siglo XVIII", "Hombre", "L"),
        row("003", "Capa corta", "Capa", "Negro", "Siglo XIX", "Mujer", "S"),
        row("004", "Vestido de gala", "Vestido", "Azul", "Siglo XIX", "Mujer", "M"),
        row("005", "Vestido campesino", "Vestido", "Verde", "Siglo XVII", "Mujer", "N/A"),
    ])
    .expect("sample catalogue is valid")
}
