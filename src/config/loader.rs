use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::core::SitterviewConfig;
use super::validation::{config_warnings, validate_config};
use crate::errors::{Result, ViewError};

/// Config file name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".sitterview.toml";

/// How many directories to walk up when searching for a config file
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<SitterviewConfig> {
    let config = toml::from_str::<SitterviewConfig>(contents)?;
    validate_config(&config)?;

    for warning in config_warnings(&config) {
        log::warn!("{}", warning);
    }

    Ok(config)
}

/// Load and validate a specific config file.
pub fn load_config_from(path: &Path) -> Result<SitterviewConfig> {
    let contents = fs::read_to_string(path)?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        ViewError::Io(_) => e,
        other => ViewError::config_with_path(other.to_string(), path),
    })
}

/// Contents of a candidate config file; absent files are silently skipped.
fn read_candidate(config_path: &Path) -> Option<String> {
    match fs::read_to_string(config_path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Cannot read {}: {}", config_path.display(), e);
            None
        }
    }
}

/// Candidate config file parsed and validated, or `None` with a warning.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SitterviewConfig> {
    let contents = read_candidate(config_path)?;
    parse_and_validate_config(&contents)
        .inspect(|_| log::debug!("Loaded config from {}", config_path.display()))
        .inspect_err(|e| {
            log::warn!("Ignoring {}: {}. Using defaults.", config_path.display(), e)
        })
        .ok()
}

/// `start` followed by its parents, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    let dirs: Vec<PathBuf> = start
        .ancestors()
        .take(max_depth)
        .map(Path::to_path_buf)
        .collect();
    dirs.into_iter()
}

/// Search `start` and its ancestors for a config file.
pub fn find_config(start: PathBuf) -> Option<SitterviewConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load config from the nearest `.sitterview.toml`, or defaults.
pub fn load_config() -> SitterviewConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return SitterviewConfig::default();
        }
    };

    find_config(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        SitterviewConfig::default()
    })
}
