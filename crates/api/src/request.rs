//! Field deserializers shared by request bodies.
//!
//! Text fields are trimmed on the way in, so length and blank checks run
//! against the stored value. Optional fields in partial updates may be
//! omitted but not sent as `null`.

use serde::de::{Deserialize, Deserializer, Error};

/// Deserialize a string with surrounding whitespace removed.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(trim_owned)
}

/// Deserialize a present field, rejecting an explicit `null`.
///
/// Pair with `#[serde(default)]` so an omitted field still becomes `None`.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom("This field may not be null")),
    }
}

/// [`non_null`] for strings, trimmed like [`trimmed`].
pub fn non_null_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    non_null::<D, String>(deserializer).map(|value| value.map(trim_owned))
}

fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}
