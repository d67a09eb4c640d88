//! Species of pets a sitter can care for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Reptile,
    Fish,
    Other,
}

impl Species {
    /// Lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Rabbit => "rabbit",
            Species::Reptile => "reptile",
            Species::Fish => "fish",
            Species::Other => "other",
        }
    }

    /// Get all species
    pub fn all() -> &'static [Species] {
        &[
            Species::Dog,
            Species::Cat,
            Species::Bird,
            Species::Rabbit,
            Species::Reptile,
            Species::Fish,
            Species::Other,
        ]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Species::all()
            .iter()
            .copied()
            .find(|species| species.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ViewError::UnknownSpecies(s.to_string()))
    }
}
