//! Categories provisioned for every newly registered user.
//!
//! The list is data, not code: it ships as `default_categories.json` next to
//! this crate's manifest and can be replaced at startup with a file of the
//! same shape (see [`DefaultCategories::load`]).

use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::{validate_hex_color, MAX_CATEGORY_NAME_LENGTH};

/// Built-in default list, compiled into the binary.
const BUILTIN_JSON: &str = include_str!("../default_categories.json");

/// One category to create for a new account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultCategory {
    pub name: String,
    pub color: String,
}

/// The validated set of categories provisioned on registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCategories(Vec<DefaultCategory>);

impl DefaultCategories {
    /// The compiled-in list: Random Thoughts, Personal, School.
    pub fn builtin() -> Self {
        // The embedded file is covered by tests; a parse failure here is a build defect.
        Self::from_json(BUILTIN_JSON).unwrap_or_else(|e| panic!("built-in defaults: {e}"))
    }

    /// Parse and validate a JSON array of `{ "name", "color" }` objects.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let entries: Vec<DefaultCategory> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid default categories: {e}")))?;

        for entry in &entries {
            let name_len = entry.name.trim().chars().count() as u64;
            if name_len == 0 || name_len > MAX_CATEGORY_NAME_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Default category name {:?} must be 1-{MAX_CATEGORY_NAME_LENGTH} characters",
                    entry.name
                )));
            }
            validate_hex_color(&entry.color).map_err(|_| {
                CoreError::Validation(format!(
                    "Default category {:?} has invalid color {:?}",
                    entry.name, entry.color
                ))
            })?;
        }

        Ok(Self(entries))
    }

    /// Load from `path` when given, otherwise fall back to [`builtin`](Self::builtin).
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    CoreError::Internal(format!(
                        "Cannot read default categories from {}: {e}",
                        path.display()
                    ))
                })?;
                Self::from_json(&json)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn entries(&self) -> &[DefaultCategory] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
