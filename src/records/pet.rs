//! Pet profiles shown in a client's pet list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    finite, lenient, FlagField, NumericField, Record, Species, TagField, TextField, TimeField,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::species")]
    pub species: Option<Species>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub age_years: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Pet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: None,
            breed: None,
            age_years: None,
            notes: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_age(mut self, age_years: f64) -> Self {
        self.age_years = Some(age_years);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

impl Record for Pet {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.breed.as_deref(), self.notes.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.name.as_str()),
            TextField::Breed => self.breed.as_deref(),
            TextField::Bio | TextField::Location => None,
        }
    }

    fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::AgeYears => finite(self.age_years),
            NumericField::Price | NumericField::Rating => None,
        }
    }

    // Pet tags double as specialty needs ("medication", "senior").
    fn tags(&self, field: TagField) -> Vec<&str> {
        match field {
            TagField::Specialties => self.tags.iter().map(String::as_str).collect(),
            TagField::Species => self.species.iter().map(Species::as_str).collect(),
        }
    }

    fn flag(&self, _field: FlagField) -> Option<bool> {
        None
    }

    fn timestamp(&self, field: TimeField) -> Option<DateTime<Utc>> {
        match field {
            TimeField::CreatedAt => self.created_at,
        }
    }
}
