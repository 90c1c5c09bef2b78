//! Pet domain model.
//!
//! # Responsibility
//! - Define the canonical pet record decoded from the `pets` collection.
//! - Keep wire naming (`healthStatus`) aligned with the document shape.
//!
//! # Invariants
//! - `id` is assigned by the store and never rewritten by core.
//! - Every field except `id` may be absent in a stored document.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned record identifier. Opaque to core.
pub type PetId = String;

/// Validation failures for a decoded pet record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetValidationError {
    /// `name` is required by the schema but the stored document has none.
    EmptyName,
}

impl Display for PetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "pet name must not be empty"),
        }
    }
}

impl Error for PetValidationError {}

/// Pet record as stored in the `pets` collection.
///
/// Decoding is lenient per field: a value that is absent, `null` or of the
/// wrong type reads as unset. Optional fields become `None`, `images` keeps
/// only its string entries and an unusable `name` becomes an empty string
/// that [`Pet::validate`] reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Filled from the collection key, not from the document body.
    #[serde(default)]
    pub id: PetId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub health_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub location: Option<String>,
    /// Image URIs or storage references, in display order.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub images: Vec<String>,
}

impl Pet {
    /// Creates a record with only `id` and `name` populated.
    pub fn new(id: impl Into<PetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            breed: None,
            age: None,
            health_status: None,
            description: None,
            location: None,
            images: Vec::new(),
        }
    }

    /// Checks the fields the query schema declares as required.
    pub fn validate(&self) -> Result<(), PetValidationError> {
        if self.name.is_empty() {
            return Err(PetValidationError::EmptyName);
        }
        Ok(())
    }
}

// Field decoders for externally written documents. A bad value reads as
// unset and never fails the record.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(value) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => Ok(number
                .as_u64()
                .and_then(|value| u32::try_from(value).ok())),
            _ => Ok(None),
        }
    }

    pub fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(value) => Some(value),
                    _ => None,
                })
                .collect()),
            _ => Ok(Vec::new()),
        }
    }
}
