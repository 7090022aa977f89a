// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are render-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain types only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Facet, FacetOptions, FilterState, GarmentRecord};

// ============================================================================
// CATALOGUE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentCardDto {
    pub item_id: String,
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub cover_image: Option<String>,
    pub in_selection: bool,
}

impl GarmentCardDto {
    pub fn from_record(record: &GarmentRecord, in_selection: bool) -> Self {
        Self {
            item_id: record.item_id.clone(),
            product_id: record.product_id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            size: record.size.clone(),
            cover_image: record.cover_image().map(str::to_string),
            in_selection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOptionDto {
    pub value: String,
    pub selected: bool,
}

/// One facet control: label, options and how many are active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetGroupDto {
    pub facet: Facet,
    pub label: String,
    pub options: Vec<FacetOptionDto>,
    pub active_count: usize,
}

impl FacetGroupDto {
    pub fn build_all(options: &FacetOptions, state: &FilterState) -> Vec<Self> {
        Facet::ALL
            .iter()
            .map(|&facet| Self {
                facet,
                label: facet.label().to_string(),
                options: options
                    .get(facet)
                    .iter()
                    .map(|value| FacetOptionDto {
                        selected: state.is_selected(facet, value),
                        value: value.clone(),
                    })
                    .collect(),
                active_count: state.values(facet).len(),
            })
            .collect()
    }
}

/// Everything the catalogue screen renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueViewDto {
    pub products: Vec<GarmentCardDto>,
    pub facets: Vec<FacetGroupDto>,
    pub result_count: usize,
    pub query: String,
    pub selection_count: usize,
}

// ============================================================================
// DETAIL DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentDetailDto {
    pub item_id: String,
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
    pub notes: Option<String>,
    pub image_url: String,
    pub image_index: usize,
    pub image_count: usize,
}

impl GarmentDetailDto {
    pub fn from_record(record: &GarmentRecord, image_index: usize) -> Self {
        Self {
            item_id: record.item_id.clone(),
            product_id: record.product_id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            era: record.era.clone(),
            garment_type: record.garment_type.clone(),
            size: record.size.clone(),
            gender: record.gender.clone(),
            social_class: record.social_class.clone(),
            color: record.color.clone(),
            fabric: record.fabric.clone(),
            measurements: record.measurements.clone(),
            original_work: record.original_work.clone(),
            notes: record.notes.clone(),
            image_url: record.image_urls.get(image_index).cloned().unwrap_or_default(),
            image_index,
            image_count: record.image_count(),
        }
    }
}

// ============================================================================
// REQUEST FORM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItemDto {
    pub item_id: String,
    pub name: String,
    pub size: String,
    pub cover_image: Option<String>,
}

impl From<&GarmentRecord> for SelectedItemDto {
    fn from(record: &GarmentRecord) -> Self {
        Self {
            item_id: record.item_id.clone(),
            name: record.name.clone(),
            size: record.size.clone(),
            cover_image: record.cover_image().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFormDto {
    pub items: Vec<SelectedItemDto>,
    pub item_summary: String,
    pub can_submit: bool,
    pub notice: Option<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_facet_options;
    use crate::domain::fixtures::sample_catalogue;

    #[test]
    fn test_facet_groups_mark_selected_options() {
        let catalogue = sample_catalogue();
        let mut state = FilterState::default();
        state.toggle(Facet::Category, "Capa");

        let groups = FacetGroupDto::build_all(&compute_facet_options(&catalogue, &state), &state);

        assert_eq!(groups.len(), Facet::ALL.len());
        let category = &groups[0];
        assert_eq!(category.label, "Categoría");
        assert_eq!(category.active_count, 1);
        let selected: Vec<&str> = category
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["Capa"]);
    }

    #[test]
    fn test_detail_image_out_of_range_is_blank() {
        let catalogue = sample_catalogue();
        let detail = GarmentDetailDto::from_record(catalogue.get("001").unwrap(), 5);
        assert_eq!(detail.image_url, "");
        assert_eq!(detail.image_count, 1);
    }
}
