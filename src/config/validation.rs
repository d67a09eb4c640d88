//! Validation with error accumulation for configuration.
//!
//! Every problem is collected before reporting.

use crate::errors::{Result, ViewError};
use crate::view::SortKey;

use super::SitterviewConfig;

/// Accepted page sizes.
pub const PAGE_SIZE_RANGE: std::ops::RangeInclusive<usize> = 1..=200;

/// Accepted debounce delays, in milliseconds.
pub const DEBOUNCE_RANGE_MS: std::ops::RangeInclusive<u64> = 50..=2000;

/// Collects every validation failure in `config`, as `field: message` pairs.
pub fn collect_config_errors(config: &SitterviewConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if !PAGE_SIZE_RANGE.contains(&config.view.page_size) {
        errors.push(format!(
            "view.page_size: out of range (expected: {}-{}, got: {})",
            PAGE_SIZE_RANGE.start(),
            PAGE_SIZE_RANGE.end(),
            config.view.page_size
        ));
    }

    if !DEBOUNCE_RANGE_MS.contains(&config.view.debounce_ms) {
        errors.push(format!(
            "view.debounce_ms: out of range (expected: {}-{}, got: {})",
            DEBOUNCE_RANGE_MS.start(),
            DEBOUNCE_RANGE_MS.end(),
            config.view.debounce_ms
        ));
    }

    errors
}

/// Validates `config`, returning all failures joined into one error.
pub fn validate_config(config: &SitterviewConfig) -> Result<()> {
    let errors = collect_config_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ViewError::validation(errors.join("; ")))
    }
}

/// Non-fatal findings; a stale sort key is recovered at runtime.
pub fn config_warnings(config: &SitterviewConfig) -> Vec<String> {
    match config.view.default_sort.parse::<SortKey>() {
        Ok(_) => Vec::new(),
        Err(err) => vec![format!("view.default_sort: {}", err)],
    }
}
