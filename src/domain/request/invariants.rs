use std::sync::LazyLock;

use regex::Regex;

use super::entity::{ContactDetails, FieldError, FIELD_EMAIL, FIELD_FULL_NAME, FIELD_PHONE};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Checks the contact fields before anything is dispatched.
/// Name, email and phone are required; the message is optional.
pub fn validate_contact(contact: &ContactDetails) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if contact.full_name.trim().is_empty() {
        errors.push(FieldError::for_field(FIELD_FULL_NAME, "Name is required"));
    }

    let email = contact.email.trim();
    if email.is_empty() {
        errors.push(FieldError::for_field(FIELD_EMAIL, "Email is required"));
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push(FieldError::for_field(FIELD_EMAIL, "Email should be an email"));
    }

    if contact.phone.trim().is_empty() {
        errors.push(FieldError::for_field(FIELD_PHONE, "Phone is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
