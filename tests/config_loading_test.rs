use std::fs;

use indoc::indoc;
use pretty_assertions::assert_eq;
use sitterview::config::{find_config, load_config_from, CONFIG_FILE_NAME};
use sitterview::{MissingValue, SortDirection, SortKey, ViewError};
use tempfile::TempDir;

#[test]
fn config_is_found_in_ancestor_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [view]
            page_size = 6
            default_sort = "rating"
        "#},
    )
    .unwrap();
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = find_config(nested).unwrap();
    assert_eq!(config.view.page_size, 6);
    assert_eq!(config.default_sort_criteria().key, SortKey::Rating);
    assert_eq!(
        config.default_sort_criteria().direction,
        SortDirection::Descending
    );
}

#[test]
fn invalid_file_is_skipped_during_search() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        "[view]\ndebounce_ms = 5\n",
    )
    .unwrap();

    assert!(find_config(root.path().to_path_buf()).is_none());
}

#[test]
fn explicit_path_reports_errors_with_path() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("custom.toml");
    fs::write(&path, "[view]\npage_size = 500\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ViewError::Configuration { .. }));
    assert_eq!(err.path(), Some(&path));
}

#[test]
fn missing_value_policy_is_configurable() {
    let root = TempDir::new().unwrap();
    let path = root.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [missing_values]
            price = "zero"
            rating = "infinite"
        "#},
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.missing_values.price, MissingValue::Zero);
    assert_eq!(config.missing_values.rating, MissingValue::Infinite);
    assert_eq!(config.view.page_size, 12);
}
