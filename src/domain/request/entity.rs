use serde::{Deserialize, Serialize};

use crate::domain::garment::GarmentRecord;

/// Form field names as the archive's relay inbox knows them
pub const FIELD_ITEM_LIST: &str = "lista_articulos";
pub const FIELD_SUBJECT: &str = "_subject";
pub const FIELD_FULL_NAME: &str = "nombre_completo";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "telefono";
pub const FIELD_MESSAGE: &str = "mensaje_proyecto";

const ITEM_SEPARATOR: &str = "-----------------------";

/// Contact fields typed by the visitor on the request form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "mensaje_proyecto", default)]
    pub message: String,
}

/// A validation message attached to one form field (or the whole form)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn for_field(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Loan/rental request handed to the form relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanRequest {
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "lista_articulos")]
    pub item_summary: String,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

impl LoanRequest {
    pub fn new(items: &[&GarmentRecord], contact: ContactDetails) -> Self {
        Self {
            subject: request_subject(items.len()),
            item_summary: build_item_summary(items),
            contact,
        }
    }
}

pub fn request_subject(item_count: usize) -> String {
    format!("Reserva de Vestuario: {} prendas", item_count)
}

/// One block per item (name, reference, size), blocks separated by a blank line
pub fn build_item_summary(items: &[&GarmentRecord]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "{}. PRENDA: {}\n   ID/REF: {}\n   TALLA: {}\n{}",
                index + 1,
                item.name,
                item.item_id,
                item.size,
                ITEM_SEPARATOR
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
