//! Sitter profiles as returned by the sitter search endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    finite, lenient, FlagField, NumericField, Record, Species, TagField, TextField, TimeField,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sitter {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_per_night: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub specialties: Vec<String>,
    #[serde(default, deserialize_with = "lenient::species_list")]
    pub accepted_species: Vec<Species>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub available: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: Option<bool>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Sitter {
    /// Minimal sitter with only an id and a name; builders fill the rest.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bio: None,
            location: None,
            price_per_night: None,
            rating: None,
            specialties: Vec::new(),
            accepted_species: Vec::new(),
            available: None,
            verified: None,
            created_at: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price_per_night = Some(price);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialties.push(specialty.into());
        self
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.accepted_species.push(species);
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

impl Record for Sitter {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.bio.as_deref(), self.location.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.name.as_str()),
            TextField::Bio => self.bio.as_deref(),
            TextField::Location => self.location.as_deref(),
            TextField::Breed => None,
        }
    }

    fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::Price => finite(self.price_per_night),
            NumericField::Rating => finite(self.rating),
            NumericField::AgeYears => None,
        }
    }

    fn tags(&self, field: TagField) -> Vec<&str> {
        match field {
            TagField::Specialties => self.specialties.iter().map(String::as_str).collect(),
            TagField::Species => self.accepted_species.iter().map(Species::as_str).collect(),
        }
    }

    fn flag(&self, field: FlagField) -> Option<bool> {
        match field {
            FlagField::Available => self.available,
            FlagField::Verified => self.verified,
        }
    }

    fn timestamp(&self, field: TimeField) -> Option<DateTime<Utc>> {
        match field {
            TimeField::CreatedAt => self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decodes_full_payload() {
        let json = indoc! {r#"
            {
                "id": "s1",
                "name": "Maxine",
                "bio": "Dog walker",
                "location": "Portland",
                "price_per_night": 45.0,
                "rating": 4.8,
                "specialties": ["senior-pets", "medication"],
                "accepted_species": ["dog", "cat"],
                "available": true,
                "verified": false,
                "created_at": "2024-03-01T10:00:00Z"
            }
        "#};
        let sitter: Sitter = serde_json::from_str(json).unwrap();
        assert_eq!(sitter.price_per_night, Some(45.0));
        assert_eq!(sitter.accepted_species, vec![Species::Dog, Species::Cat]);
        assert_eq!(sitter.tags(TagField::Species), vec!["dog", "cat"]);
        assert!(sitter.created_at.is_some());
    }

    #[test]
    fn test_malformed_fields_decode_as_absent() {
        let json = r#"{
            "id": "s2",
            "name": "Bella",
            "price_per_night": "n/a",
            "rating": null,
            "accepted_species": ["dog", "dragon", 7],
            "available": "yes",
            "created_at": "last tuesday"
        }"#;
        let sitter: Sitter = serde_json::from_str(json).unwrap();
        assert_eq!(sitter.numeric(NumericField::Price), None);
        assert_eq!(sitter.numeric(NumericField::Rating), None);
        assert_eq!(sitter.accepted_species, vec![Species::Dog]);
        assert_eq!(sitter.flag(FlagField::Available), None);
        assert_eq!(sitter.created_at, None);
    }

    #[test]
    fn test_numeric_string_is_accepted() {
        let json = r#"{"id": "s3", "name": "Rex", "price_per_night": " 30.5 "}"#;
        let sitter: Sitter = serde_json::from_str(json).unwrap();
        assert_eq!(sitter.numeric(NumericField::Price), Some(30.5));
    }

    #[test]
    fn test_search_fields_skip_missing() {
        let sitter = Sitter::new("s4", "Max").with_location("Austin");
        assert_eq!(sitter.search_fields(), vec!["Max", "Austin"]);
    }

    #[test]
    fn test_nan_rating_reads_as_absent() {
        let sitter = Sitter::new("s5", "Nan").with_rating(f64::NAN);
        assert_eq!(sitter.numeric(NumericField::Rating), None);
    }
}
