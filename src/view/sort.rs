//! Sort functionality for collection views.
//!
//! Exactly one sort key is active at a time. The comparator built here has
//! no tie-breaker of its own; callers sort with the stable `slice::sort_by`,
//! so ties keep their original collection order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::filter::MissingValuePolicy;
use crate::errors::ViewError;
use crate::records::{FlagField, NumericField, Record, TextField, TimeField};

/// Weight applied to the rating of an available sitter in relevance order.
pub const AVAILABILITY_BOOST: f64 = 1.5;

/// Sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Original collection order
    #[default]
    Natural,
    /// Rating boosted by availability
    Relevance,
    Price,
    Rating,
    Name,
    Location,
    Age,
    /// Creation timestamp, so descending lists the most recent first
    Newest,
}

impl SortKey {
    /// Identifier accepted by `from_str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Natural => "natural",
            SortKey::Relevance => "relevance",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
            SortKey::Location => "location",
            SortKey::Age => "age",
            SortKey::Newest => "newest",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Natural => "Original Order",
            SortKey::Relevance => "Relevance",
            SortKey::Price => "Price",
            SortKey::Rating => "Rating",
            SortKey::Name => "Name",
            SortKey::Location => "Location",
            SortKey::Age => "Age",
            SortKey::Newest => "Date Added",
        }
    }

    /// Get all sort keys
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Natural,
            SortKey::Relevance,
            SortKey::Price,
            SortKey::Rating,
            SortKey::Name,
            SortKey::Location,
            SortKey::Age,
            SortKey::Newest,
        ]
    }

    /// Parses `key`, falling back to [`SortKey::Relevance`] for unknown keys.
    ///
    /// An unknown key usually means a stale saved configuration, so it is
    /// logged rather than surfaced as an error.
    pub fn resolve(key: &str) -> SortKey {
        match key.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("{}; falling back to {}", err, SortKey::Relevance.as_str());
                SortKey::Relevance
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SortKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ViewError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending base ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ViewError::UnknownDirection(s.to_string())),
        }
    }
}

/// Active ordering of a collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortCriteria {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortCriteria {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// True when records keep their collection order.
    pub fn is_natural(&self) -> bool {
        self.key == SortKey::Natural
    }

    /// Get display name, e.g. "Price (Low to High)"
    pub fn display_name(&self) -> String {
        if self.is_natural() {
            return self.key.display_name().to_string();
        }
        let arrow = match (self.key, self.direction) {
            (SortKey::Name | SortKey::Location, SortDirection::Ascending) => "A-Z",
            (SortKey::Name | SortKey::Location, SortDirection::Descending) => "Z-A",
            (SortKey::Newest, SortDirection::Ascending) => "Oldest First",
            (SortKey::Newest, SortDirection::Descending) => "Newest First",
            (_, SortDirection::Ascending) => "Low to High",
            (_, SortDirection::Descending) => "High to Low",
        };
        format!("{} ({})", self.key.display_name(), arrow)
    }
}

/// Two-argument ordering function over records.
pub type Comparator<'a, R> = Box<dyn Fn(&R, &R) -> Ordering + 'a>;

/// Builds the comparator for `key` in `direction`.
///
/// Absent numeric fields are ordered by the policy's sort sentinel, so an
/// unpriced sitter sorts after every priced one in ascending price order.
pub fn build_comparator<'a, R: Record + 'a>(
    key: SortKey,
    direction: SortDirection,
    policy: &MissingValuePolicy,
) -> Comparator<'a, R> {
    let policy = *policy;
    match key {
        SortKey::Natural => Box::new(|_: &R, _: &R| Ordering::Equal),
        SortKey::Relevance => Box::new(move |a: &R, b: &R| {
            direction.apply(relevance_score(a).total_cmp(&relevance_score(b)))
        }),
        SortKey::Price => numeric_comparator(NumericField::Price, direction, policy),
        SortKey::Rating => numeric_comparator(NumericField::Rating, direction, policy),
        SortKey::Age => numeric_comparator(NumericField::AgeYears, direction, policy),
        SortKey::Name => text_comparator(TextField::Name, direction),
        SortKey::Location => text_comparator(TextField::Location, direction),
        SortKey::Newest => Box::new(move |a: &R, b: &R| {
            let time_a = a.timestamp(TimeField::CreatedAt);
            let time_b = b.timestamp(TimeField::CreatedAt);
            // Option orders None first, so undated records count as oldest
            direction.apply(time_a.cmp(&time_b))
        }),
    }
}

/// Builds the comparator for a string key, falling back to relevance for
/// unknown keys.
pub fn build_comparator_for<'a, R: Record + 'a>(
    key: &str,
    direction: SortDirection,
    policy: &MissingValuePolicy,
) -> Comparator<'a, R> {
    build_comparator(SortKey::resolve(key), direction, policy)
}

fn numeric_comparator<'a, R: Record + 'a>(
    field: NumericField,
    direction: SortDirection,
    policy: MissingValuePolicy,
) -> Comparator<'a, R> {
    let sentinel = policy.for_field(field).sort_sentinel();
    Box::new(move |a: &R, b: &R| {
        let value_a = a.numeric(field).unwrap_or(sentinel);
        let value_b = b.numeric(field).unwrap_or(sentinel);
        direction.apply(value_a.total_cmp(&value_b))
    })
}

fn text_comparator<'a, R: Record + 'a>(
    field: TextField,
    direction: SortDirection,
) -> Comparator<'a, R> {
    Box::new(move |a: &R, b: &R| {
        let text_a = a.text(field).unwrap_or("");
        let text_b = b.text(field).unwrap_or("");
        direction.apply(compare_text(text_a, text_b))
    })
}

/// Case-insensitive text ordering with the raw text as a secondary key.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Composite relevance score: rating, boosted when the record is available.
pub fn relevance_score<R: Record>(record: &R) -> f64 {
    let rating = record.numeric(NumericField::Rating).unwrap_or(0.0);
    if record.flag(FlagField::Available) == Some(true) {
        rating * AVAILABILITY_BOOST
    } else {
        rating
    }
}

/// Sorts `items` in place; the sort is stable.
pub fn sort_records<R: Record>(
    items: &mut [&R],
    criteria: SortCriteria,
    policy: &MissingValuePolicy,
) {
    let comparator = build_comparator::<R>(criteria.key, criteria.direction, policy);
    items.sort_by(|a, b| comparator(*a, *b));
}
