// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod records;
pub mod view;

// Re-export commonly used types
pub use crate::config::{load_config, parse_and_validate_config, SitterviewConfig};
pub use crate::errors::{Result, ViewError};
pub use crate::input::{forward_search, DebouncedInput, Debouncer, DEFAULT_DEBOUNCE};
pub use crate::records::{Pet, Record, Sitter, Species};
pub use crate::view::{
    build_comparator, matches, paginate, CollectionView, FilterCriteria, FilterPatch,
    MissingValue, MissingValuePolicy, Page, SortCriteria, SortDirection, SortKey, ViewSnapshot,
    ViewStore, ViewSummary,
};
