//! Filter predicate evaluation for collection views.
//!
//! A [`FilterCriteria`] value is compiled into a list of active
//! [`Constraint`]s once per recompute; each record is then tested against
//! every constraint. All constraints are ANDed and an absent criterion never
//! constrains anything.

use serde::{Deserialize, Serialize};

use crate::records::{finite, FlagField, NumericField, Record, Species, TagField};

/// How an absent numeric field behaves under range constraints and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValue {
    /// Behaves as `+inf`: fails every max bound, passes every min bound.
    Infinite,
    /// Behaves as `0.0`.
    Zero,
    /// Fails every constraint on the field; sorts below every present value.
    Exclude,
}

impl MissingValue {
    /// Substitute value for range checks, `None` when the record is excluded.
    pub fn substitute(self) -> Option<f64> {
        match self {
            MissingValue::Infinite => Some(f64::INFINITY),
            MissingValue::Zero => Some(0.0),
            MissingValue::Exclude => None,
        }
    }

    /// Value used in place of the field when ordering records.
    pub fn sort_sentinel(self) -> f64 {
        match self {
            MissingValue::Infinite => f64::INFINITY,
            MissingValue::Zero => 0.0,
            MissingValue::Exclude => f64::NEG_INFINITY,
        }
    }
}

/// Per-field missing-value policy.
///
/// Defaults: an unpriced sitter is never "cheap enough", an unrated sitter
/// never meets a minimum rating, and a pet of unknown age never matches an
/// age bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingValuePolicy {
    pub price: MissingValue,
    pub rating: MissingValue,
    pub age_years: MissingValue,
}

impl Default for MissingValuePolicy {
    fn default() -> Self {
        Self {
            price: MissingValue::Infinite,
            rating: MissingValue::Exclude,
            age_years: MissingValue::Exclude,
        }
    }
}

impl MissingValuePolicy {
    pub fn for_field(&self, field: NumericField) -> MissingValue {
        match field {
            NumericField::Price => self.price,
            NumericField::Rating => self.rating,
            NumericField::AgeYears => self.age_years,
        }
    }

    /// Field value with the policy applied.
    pub fn resolve(&self, field: NumericField, value: Option<f64>) -> Option<f64> {
        value.or_else(|| self.for_field(field).substitute())
    }
}

/// Inclusion constraints for a collection view. `Default` constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring over the record's search fields
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_age_years: Option<f64>,
    /// Required specialty tag
    pub specialty: Option<String>,
    pub species: Option<Species>,
    pub available: Option<bool>,
    pub verified: Option<bool>,
}

/// A single field update inside a [`FilterPatch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldUpdate<T> {
    /// Leave the current value untouched
    #[default]
    Keep,
    Set(T),
    /// Remove the constraint
    Clear,
}

impl<T> FieldUpdate<T> {
    fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Keep => current,
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Clear => None,
        }
    }

    fn is_keep(&self) -> bool {
        matches!(self, FieldUpdate::Keep)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Clear,
        }
    }
}

/// Partial criteria merged field by field into the current criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search: FieldUpdate<String>,
    pub min_price: FieldUpdate<f64>,
    pub max_price: FieldUpdate<f64>,
    pub min_rating: FieldUpdate<f64>,
    pub max_age_years: FieldUpdate<f64>,
    pub specialty: FieldUpdate<String>,
    pub species: FieldUpdate<Species>,
    pub available: FieldUpdate<bool>,
    pub verified: FieldUpdate<bool>,
}

impl FilterPatch {
    /// Patch touching only the search string.
    pub fn search(value: impl Into<String>) -> Self {
        Self {
            search: FieldUpdate::Set(value.into()),
            ..Self::default()
        }
    }

    pub fn is_noop(&self) -> bool {
        self.search.is_keep()
            && self.min_price.is_keep()
            && self.max_price.is_keep()
            && self.min_rating.is_keep()
            && self.max_age_years.is_keep()
            && self.specialty.is_keep()
            && self.species.is_keep()
            && self.available.is_keep()
            && self.verified.is_keep()
    }
}

impl FilterCriteria {
    /// Criteria with only a search string.
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    /// New criteria with `patch` merged in; `self` is left unchanged.
    pub fn merged(&self, patch: FilterPatch) -> Self {
        let current = self.clone();
        Self {
            search: patch.search.apply(current.search),
            min_price: patch.min_price.apply(current.min_price),
            max_price: patch.max_price.apply(current.max_price),
            min_rating: patch.min_rating.apply(current.min_rating),
            max_age_years: patch.max_age_years.apply(current.max_age_years),
            specialty: patch.specialty.apply(current.specialty),
            species: patch.species.apply(current.species),
            available: patch.available.apply(current.available),
            verified: patch.verified.apply(current.verified),
        }
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.active_constraints() == 0
    }

    /// Number of constraints that will actually narrow the collection.
    pub fn active_constraints(&self) -> usize {
        self.compile(&MissingValuePolicy::default())
            .constraints()
            .len()
    }

    /// Builds the list of active constraints.
    pub fn compile(&self, policy: &MissingValuePolicy) -> CompiledFilter {
        let mut constraints = Vec::new();

        if let Some(needle) = self.search.as_deref().map(str::trim) {
            if !needle.is_empty() {
                constraints.push(Constraint::Search(needle.to_lowercase()));
            }
        }

        // Non-finite bounds (NaN from a bad input) constrain nothing
        if let Some(min) = finite(self.min_price) {
            constraints.push(Constraint::AtLeast(NumericField::Price, min));
        }

        if let Some(max) = finite(self.max_price) {
            constraints.push(Constraint::AtMost(NumericField::Price, max));
        }

        if let Some(min) = finite(self.min_rating) {
            constraints.push(Constraint::AtLeast(NumericField::Rating, min));
        }

        if let Some(max) = finite(self.max_age_years) {
            constraints.push(Constraint::AtMost(NumericField::AgeYears, max));
        }

        if let Some(tag) = self.specialty.as_deref().map(str::trim) {
            if !tag.is_empty() {
                constraints.push(Constraint::HasTag(TagField::Specialties, tag.to_lowercase()));
            }
        }

        if let Some(species) = self.species {
            constraints.push(Constraint::HasTag(
                TagField::Species,
                species.as_str().to_string(),
            ));
        }

        if let Some(available) = self.available {
            constraints.push(Constraint::Flag(FlagField::Available, available));
        }

        if let Some(verified) = self.verified {
            constraints.push(Constraint::Flag(FlagField::Verified, verified));
        }

        CompiledFilter {
            constraints,
            policy: *policy,
        }
    }
}

/// One active inclusion constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Lowercased search needle
    Search(String),
    AtLeast(NumericField, f64),
    AtMost(NumericField, f64),
    /// Required tag, lowercased like the candidates it is compared with
    HasTag(TagField, String),
    Flag(FlagField, bool),
}

impl Constraint {
    /// Check if a record satisfies this constraint under `policy`.
    pub fn matches<R: Record>(&self, record: &R, policy: &MissingValuePolicy) -> bool {
        match self {
            Constraint::Search(needle) => record
                .search_fields()
                .iter()
                .any(|text| text.to_lowercase().contains(needle.as_str())),
            Constraint::AtLeast(field, min) => policy
                .resolve(*field, record.numeric(*field))
                .is_some_and(|value| value >= *min),
            Constraint::AtMost(field, max) => policy
                .resolve(*field, record.numeric(*field))
                .is_some_and(|value| value <= *max),
            Constraint::HasTag(field, tag) => record
                .tags(*field)
                .iter()
                .any(|candidate| candidate.to_lowercase() == *tag),
            Constraint::Flag(field, expected) => record.flag(*field) == Some(*expected),
        }
    }

    /// Get display name for constraint
    pub fn display_name(&self) -> String {
        match self {
            Constraint::Search(needle) => format!("Search: \"{}\"", needle),
            Constraint::AtLeast(field, min) => format!("{} >= {}", field_label(*field), min),
            Constraint::AtMost(field, max) => format!("{} <= {}", field_label(*field), max),
            Constraint::HasTag(TagField::Specialties, tag) => format!("Specialty: {}", tag),
            Constraint::HasTag(TagField::Species, tag) => format!("Species: {}", tag),
            Constraint::Flag(FlagField::Available, value) => format!("Available: {}", value),
            Constraint::Flag(FlagField::Verified, value) => format!("Verified: {}", value),
        }
    }
}

fn field_label(field: NumericField) -> &'static str {
    match field {
        NumericField::Price => "Price",
        NumericField::Rating => "Rating",
        NumericField::AgeYears => "Age",
    }
}

/// Criteria compiled for repeated evaluation over a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFilter {
    constraints: Vec<Constraint>,
    policy: MissingValuePolicy,
}

impl CompiledFilter {
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.matches(record, &self.policy))
    }
}

/// Check if `record` satisfies every active constraint, using the default
/// missing-value policy.
pub fn matches<R: Record>(record: &R, criteria: &FilterCriteria) -> bool {
    matches_with_policy(record, criteria, &MissingValuePolicy::default())
}

/// Check if `record` satisfies every active constraint under `policy`.
pub fn matches_with_policy<R: Record>(
    record: &R,
    criteria: &FilterCriteria,
    policy: &MissingValuePolicy,
) -> bool {
    criteria.compile(policy).matches(record)
}
