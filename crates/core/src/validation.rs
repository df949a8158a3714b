//! Field limits and validation functions for request payloads.
//!
//! The `validate_*` functions here have the signature `validator`'s
//! `custom(function = ...)` attribute expects, so DTOs in the API crate can
//! reference them directly.

use validator::{ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 255;

/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#FFFFFF";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a `#RRGGBB` hex color string.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("hex_color");
        error.message = Some("Color must be a hex string like #A1B2C3".into());
        Err(error)
    }
}

/// Reject strings containing a NUL character, which Postgres text columns
/// cannot store.
pub fn validate_no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut error = ValidationError::new("null_character");
        error.message = Some("Null characters are not allowed".into());
        return Err(error);
    }
    Ok(())
}

/// Reject strings that are empty once surrounding whitespace is trimmed, or
/// that fail [`validate_no_nul`].
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("This field may not be blank".into());
        return Err(error);
    }
    validate_no_nul(value)
}

/// Flatten `validator` errors into one human-readable line.
///
/// Fields are sorted so the message is stable, e.g.
/// `"email: invalid email; title: This field may not be blank"`.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("invalid {}", e.code),
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
