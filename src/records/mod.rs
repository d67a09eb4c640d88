//! Domain records flowing through a collection view.
//!
//! Records are owned by the data source and are read-only from the view's
//! perspective. The [`Record`] trait exposes the queryable fields by typed
//! field identifiers so the filter evaluator and the comparator builder can
//! work over sitters and pets alike.
//!
//! Every accessor returns an `Option`: a payload with a missing or malformed
//! field must reach the evaluator intact, which then applies the configured
//! missing-value policy instead of failing.

mod lenient;
pub mod pet;
pub mod sitter;
pub mod species;

pub use pet::Pet;
pub use sitter::Sitter;
pub use species::Species;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Free-text fields addressable by sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Bio,
    Location,
    Breed,
}

/// Numeric fields addressable by range constraints and sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    /// Nightly price for sitters
    Price,
    /// Average review rating, 0-5
    Rating,
    /// Age of a pet in years
    AgeYears,
}

/// Tag collections addressable by set-membership constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Specialties,
    Species,
}

/// Boolean flags addressable by equality constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    Available,
    Verified,
}

/// Timestamp fields addressable by sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    CreatedAt,
}

/// Read-only field access for any entity shown in a collection view.
///
/// Implementations return `None` for absent fields and for non-finite
/// numbers; callers never see NaN.
pub trait Record {
    /// Stable identifier used by snapshots and renderers.
    fn id(&self) -> &str;

    /// Text fields matched by the free-text search, in priority order.
    fn search_fields(&self) -> Vec<&str>;

    fn text(&self, field: TextField) -> Option<&str>;

    fn numeric(&self, field: NumericField) -> Option<f64>;

    fn tags(&self, field: TagField) -> Vec<&str>;

    fn flag(&self, field: FlagField) -> Option<bool>;

    fn timestamp(&self, field: TimeField) -> Option<DateTime<Utc>>;
}

/// Drops non-finite values so malformed numbers behave like absent ones.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Decode a record array from a JSON string.
pub fn from_json_str<R: DeserializeOwned>(contents: &str) -> Result<Vec<R>> {
    Ok(serde_json::from_str(contents)?)
}

/// Read and decode a record array from a JSON file.
pub fn load_json<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let contents = fs::read_to_string(path)?;
    let records = from_json_str(&contents)?;
    log::debug!("Loaded records from {}", path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_drops_nan_and_infinity() {
        assert_eq!(finite(Some(f64::NAN)), None);
        assert_eq!(finite(Some(f64::INFINITY)), None);
        assert_eq!(finite(Some(12.5)), Some(12.5));
        assert_eq!(finite(None), None);
    }

    #[test]
    fn test_from_json_str_rejects_non_array() {
        let result = from_json_str::<Sitter>("{\"id\": \"s1\"}");
        assert!(result.is_err());
    }
}
