use super::entity::GarmentRecord;
use crate::domain::{DomainError, DomainResult};

/// Validates the invariants a single garment record must satisfy
/// before it can enter a catalogue.
pub fn validate_garment(record: &GarmentRecord) -> DomainResult<()> {
    validate_item_id(&record.item_id)?;
    validate_images(record)?;
    Ok(())
}

fn validate_item_id(item_id: &str) -> DomainResult<()> {
    if item_id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Garment itemId cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_images(record: &GarmentRecord) -> DomainResult<()> {
    if record.image_urls.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Garment {} must have at least one image",
            record.item_id
        )));
    }
    Ok(())
}

/// Invariants that must hold true for garment records:
///
/// 1. itemId is never blank
/// 2. At least one image reference exists
/// 3. Facet-bearing attributes are single-valued strings
/// 4. Records are immutable for the whole session

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::garment;

    #[test]
    fn test_valid_garment() {
        let record = garment("001", "Capa de terciopelo");
        assert!(validate_garment(&record).is_ok());
    }

    #[test]
    fn test_blank_item_id_fails() {
        let record = garment("  ", "Capa");
        assert!(validate_garment(&record).is_err());
    }

    #[test]
    fn test_missing_images_fails() {
        let mut record = garment("002", "Casaca");
        record.image_urls.clear();
        assert!(validate_garment(&record).is_err());
    }
}
