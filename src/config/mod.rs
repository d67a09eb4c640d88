//! Configuration for sitterview.
//!
//! Settings come from the nearest `.sitterview.toml` (searched upward from
//! the working directory). A missing or invalid file falls back to defaults
//! with a warning; it never stops a view from mounting.

mod core;
mod loader;
pub mod validation;

pub use self::core::{SitterviewConfig, ViewSettings};
pub use loader::{
    directory_ancestors, find_config, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use validation::{collect_config_errors, config_warnings, validate_config};
