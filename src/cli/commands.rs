//! Handlers for the `sitters` and `pets` commands.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::{OutputFormat, PetsArgs, SittersArgs, ViewArgs};
use super::render::{render_json, render_table, TableRow};
use crate::config::{load_config, load_config_from, SitterviewConfig};
use crate::records::{load_json, Pet, Record, Sitter};
use crate::view::{CollectionView, FilterCriteria, SortCriteria, SortKey};

/// Explicit config path, or the nearest `.sitterview.toml`, or defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<SitterviewConfig> {
    match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Sort criteria from config defaults overridden by command-line flags.
pub fn sort_criteria(config: &SitterviewConfig, args: &ViewArgs) -> SortCriteria {
    let defaults = config.default_sort_criteria();
    SortCriteria::new(
        args.sort.as_deref().map(SortKey::resolve).unwrap_or(defaults.key),
        args.direction.unwrap_or(defaults.direction),
    )
}

pub fn sitter_filter(args: &SittersArgs) -> FilterCriteria {
    FilterCriteria {
        search: args.view.search.clone(),
        min_price: args.min_price,
        max_price: args.max_price,
        min_rating: args.min_rating,
        specialty: args.specialty.clone(),
        species: args.species,
        available: args.available.then_some(true),
        ..FilterCriteria::default()
    }
}

pub fn pet_filter(args: &PetsArgs) -> FilterCriteria {
    FilterCriteria {
        search: args.view.search.clone(),
        species: args.species,
        max_age_years: args.max_age,
        ..FilterCriteria::default()
    }
}

/// Mounts a view over `records` the way an interactive screen would.
pub fn build_view<R: Record>(
    config: &SitterviewConfig,
    args: &ViewArgs,
    records: Vec<R>,
    filter: FilterCriteria,
) -> CollectionView<R> {
    let mut view = CollectionView::new()
        .with_page_size(args.page_size.unwrap_or(config.view.page_size))
        .with_sort(sort_criteria(config, args))
        .with_policy(config.missing_values);
    view.set_raw_collection(records);
    view.set_filter_criteria(filter);
    // Pages are 1-based on the command line
    view.set_page_index(args.page.saturating_sub(1));
    view
}

/// Renders the current page of `view` in the requested format.
pub fn render_view<R: Record + TableRow + Serialize>(
    label: &str,
    view: &CollectionView<R>,
    format: OutputFormat,
    use_color: bool,
) -> Result<String> {
    let page = view.page();
    let summary = view.summary();
    let compiled = view.filter_criteria().compile(view.missing_value_policy());

    match format {
        OutputFormat::Table => Ok(render_table(
            label,
            &page,
            &summary,
            compiled.constraints(),
            use_color,
        )),
        OutputFormat::Json => Ok(render_json(&page, &summary, compiled.constraints())?),
    }
}

fn run<R>(label: &str, args: &ViewArgs, filter: FilterCriteria, use_color: bool) -> Result<()>
where
    R: Record + TableRow + Serialize + serde::de::DeserializeOwned,
{
    let config = resolve_config(args.config.as_deref())?;
    let records: Vec<R> = load_json(&args.file)
        .with_context(|| format!("Failed to load {} from {}", label, args.file.display()))?;
    log::info!("Loaded {} {} records", records.len(), label.to_lowercase());

    let view = build_view(&config, args, records, filter);
    print!("{}", render_view(label, &view, args.format, use_color)?);
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

pub fn handle_sitters_command(args: SittersArgs, use_color: bool) -> Result<()> {
    let filter = sitter_filter(&args);
    run::<Sitter>("Sitters", &args.view, filter, use_color)
}

pub fn handle_pets_command(args: PetsArgs, use_color: bool) -> Result<()> {
    let filter = pet_filter(&args);
    run::<Pet>("Pets", &args.view, filter, use_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Cli, Commands};
    use crate::view::SortDirection;
    use clap::Parser;

    fn sitters_args(argv: &[&str]) -> SittersArgs {
        let mut full = vec!["sitterview", "sitters", "sitters.json"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Sitters(args) => args,
            Commands::Pets(_) => unreachable!(),
        }
    }

    #[test]
    fn test_sort_flags_override_config_defaults() {
        let mut config = SitterviewConfig::default();
        config.view.default_sort = "rating".to_string();

        let args = sitters_args(&[]);
        assert_eq!(
            sort_criteria(&config, &args.view),
            SortCriteria::descending(SortKey::Rating)
        );

        let args = sitters_args(&["--sort", "price", "--direction", "ascending"]);
        assert_eq!(
            sort_criteria(&config, &args.view),
            SortCriteria::new(SortKey::Price, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_unknown_sort_flag_falls_back_to_relevance() {
        let args = sitters_args(&["--sort", "distance"]);
        let criteria = sort_criteria(&SitterviewConfig::default(), &args.view);
        assert_eq!(criteria.key, SortKey::Relevance);
    }

    #[test]
    fn test_available_flag_only_constrains_when_set() {
        assert_eq!(sitter_filter(&sitters_args(&[])).available, None);
        assert_eq!(
            sitter_filter(&sitters_args(&["--available"])).available,
            Some(true)
        );
    }

    #[test]
    fn test_build_view_clamps_requested_page() {
        let args = sitters_args(&["--page", "9", "--page-size", "1"]);
        let records = vec![Sitter::new("1", "Max"), Sitter::new("2", "Bella")];
        let view = build_view(
            &SitterviewConfig::default(),
            &args.view,
            records,
            FilterCriteria::default(),
        );
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.page_index(), 1);
    }

    #[test]
    fn test_missing_config_path_is_an_error() {
        let result = resolve_config(Some(Path::new("/nonexistent/.sitterview.toml")));
        assert!(result.is_err());
    }
}
