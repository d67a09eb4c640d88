use serde::{Deserialize, Serialize};

use crate::input::DEFAULT_DEBOUNCE;
use crate::view::{MissingValuePolicy, SortCriteria, SortDirection, SortKey, DEFAULT_PAGE_SIZE};

/// Root configuration structure for sitterview
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SitterviewConfig {
    /// Paging, debounce and default ordering
    #[serde(default)]
    pub view: ViewSettings,

    /// How absent numeric fields behave under filters and sorting
    #[serde(default)]
    pub missing_values: MissingValuePolicy,
}

/// View configuration for paging and input handling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewSettings {
    /// Records per page (default: 12)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet period before search input is applied, in milliseconds (default: 300)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Sort key applied when a view mounts; unknown keys resolve to relevance.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    #[serde(default)]
    pub default_direction: SortDirection,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            default_sort: default_sort(),
            default_direction: SortDirection::default(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_sort() -> String {
    SortKey::default().as_str().to_string()
}

impl ViewSettings {
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

impl SitterviewConfig {
    /// Sort criteria a new view starts with; unknown keys fall back to relevance.
    pub fn default_sort_criteria(&self) -> SortCriteria {
        SortCriteria::new(
            SortKey::resolve(&self.view.default_sort),
            self.view.default_direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SitterviewConfig::default();
        assert_eq!(config.view.page_size, 12);
        assert_eq!(config.view.debounce_ms, 300);
        assert_eq!(config.view.debounce(), DEFAULT_DEBOUNCE);
        assert_eq!(config.default_sort_criteria(), SortCriteria::default());
    }

    #[test]
    fn test_stale_default_sort_falls_back() {
        let mut config = SitterviewConfig::default();
        config.view.default_sort = "popularity".to_string();
        config.view.default_direction = SortDirection::Ascending;
        assert_eq!(
            config.default_sort_criteria(),
            SortCriteria::ascending(SortKey::Relevance)
        );
    }
}
