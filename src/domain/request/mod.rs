pub mod entity;
pub mod invariants;

pub use entity::{
    build_item_summary, request_subject, ContactDetails, FieldError, LoanRequest,
    FIELD_EMAIL, FIELD_FULL_NAME, FIELD_ITEM_LIST, FIELD_MESSAGE, FIELD_PHONE, FIELD_SUBJECT,
};
pub use invariants::validate_contact;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_catalogue;

    #[test]
    fn test_item_summary_blocks() {
        let catalogue = sample_catalogue();
        let items = vec![catalogue.get("001").unwrap(), catalogue.get("003").unwrap()];

        let summary = build_item_summary(&items);
        assert_eq!(
            summary,
            "1. PRENDA: Capa de terciopelo\n   ID/REF: 001\n   TALLA: M\n-----------------------\n\n\
             2. PRENDA: Capa corta\n   ID/REF: 003\n   TALLA: S\n-----------------------"
        );
    }

    #[test]
    fn test_payload_field_names() {
        let catalogue = sample_catalogue();
        let items = vec![catalogue.get("002").unwrap()];
        let request = LoanRequest::new(
            &items,
            ContactDetails {
                full_name: "Luis".to_string(),
                email: "luis@example.org".to_string(),
                phone: "123".to_string(),
                message: "Obra de fin de curso".to_string(),
            },
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value[FIELD_SUBJECT], "Reserva de Vestuario: 1 prendas");
        assert!(value[FIELD_ITEM_LIST].as_str().unwrap().contains("ID/REF: 002"));
        assert_eq!(value[FIELD_FULL_NAME], "Luis");
        assert_eq!(value[FIELD_MESSAGE], "Obra de fin de curso");
    }

    #[test]
    fn test_payload_uses_archive_form_names() {
        let request = LoanRequest::new(
            &[],
            ContactDetails {
                full_name: "Luis".to_string(),
                email: "luis@example.org".to_string(),
                phone: "123".to_string(),
                message: "Obra".to_string(),
            },
        );

        let value = serde_json::to_value(&request).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["_subject", "email", "lista_articulos", "mensaje_proyecto", "nombre_completo", "telefono"]
        );
    }
}
