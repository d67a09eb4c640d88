// Test utility module for sitterview integration tests
#![allow(dead_code)]

use sitterview::{Sitter, Species};

/// Five sitters priced 10..=50 in insertion order.
pub fn priced_sitters() -> Vec<Sitter> {
    [10.0, 20.0, 30.0, 40.0, 50.0]
        .into_iter()
        .enumerate()
        .map(|(i, price)| Sitter::new(format!("s{}", i), format!("Sitter {}", i)).with_price(price))
        .collect()
}

/// Five sitters priced 10..=50 and rated 1..=5, all available.
pub fn rated_sitters() -> Vec<Sitter> {
    priced_sitters()
        .into_iter()
        .zip([1.0, 2.0, 3.0, 4.0, 5.0])
        .map(|(sitter, rating)| sitter.with_rating(rating).with_available(true))
        .collect()
}

pub fn named_sitters() -> Vec<Sitter> {
    vec![
        Sitter::new("max", "Max"),
        Sitter::new("maxine", "Maxine"),
        Sitter::new("bella", "Bella"),
    ]
}

/// A realistic mixed collection with gaps in optional fields.
pub fn mixed_sitters() -> Vec<Sitter> {
    vec![
        Sitter::new("1", "Alice")
            .with_price(35.0)
            .with_rating(4.8)
            .with_location("Leeds")
            .with_specialty("Puppies")
            .with_species(Species::Dog)
            .with_available(true),
        Sitter::new("2", "Bob")
            .with_price(20.0)
            .with_rating(4.1)
            .with_location("York")
            .with_species(Species::Cat)
            .with_available(false),
        Sitter::new("3", "Carmen")
            .with_rating(4.9)
            .with_location("Hull")
            .with_specialty("Senior pets")
            .with_species(Species::Dog)
            .with_species(Species::Cat),
        Sitter::new("4", "Dev")
            .with_price(55.0)
            .with_location("Leeds")
            .with_species(Species::Bird)
            .with_available(true),
    ]
}

pub fn ids<'a>(records: impl IntoIterator<Item = &'a Sitter>) -> Vec<String> {
    records.into_iter().map(|s| s.id.clone()).collect()
}
