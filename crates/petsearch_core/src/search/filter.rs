//! Field filter construction for the `pets` collection.

use crate::db::PETS_COLLECTION;

/// Pet fields that support substring lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetField {
    Breed,
    Location,
}

impl PetField {
    /// Document field name, also used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Breed => "breed",
            Self::Location => "location",
        }
    }

    fn json_path(self) -> &'static str {
        match self {
            Self::Breed => "$.breed",
            Self::Location => "$.location",
        }
    }
}

/// Unanchored, case-insensitive pattern match against one string field.
///
/// The pattern goes to the matcher verbatim, so `.` or `^` keep their regex
/// meaning. Documents whose field is missing or not a string never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFilter<'a> {
    pub field: PetField,
    pub pattern: &'a str,
}

impl<'a> FieldFilter<'a> {
    pub fn contains(field: PetField, pattern: &'a str) -> Self {
        Self { field, pattern }
    }

    /// Select statement returning `id, document` rows for this filter.
    ///
    /// `?1` binds the JSON path and `?2` the pattern, see [`Self::params`].
    /// No `ORDER BY`: rows come back in the collection's natural order.
    pub fn select_sql(&self) -> String {
        format!(
            "SELECT id, document FROM {PETS_COLLECTION}
             WHERE json_type(document, ?1) = 'text'
               AND json_extract(document, ?1) REGEXP ?2"
        )
    }

    pub fn params(&self) -> [&'a str; 2] {
        [self.field.json_path(), self.pattern]
    }
}
