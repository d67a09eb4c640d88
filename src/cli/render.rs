//! Table and JSON rendering of a collection view page.

use colored::Colorize;
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

use crate::errors::Result;
use crate::records::{Pet, Sitter};
use crate::view::{Constraint, Page, ViewSummary};

/// A record that can be shown as one table row.
pub trait TableRow {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

impl TableRow for Sitter {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Location", "Price", "Rating", "Specialties", "Available"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            or_dash(self.location.clone()),
            or_dash(self.price_per_night.map(|p| format!("{:.2}", p))),
            or_dash(self.rating.map(|r| format!("{:.1}", r))),
            self.specialties.join(", "),
            match self.available {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
        ]
    }
}

impl TableRow for Pet {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Species", "Breed", "Age", "Tags"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            or_dash(self.species.map(|s| s.to_string())),
            or_dash(self.breed.clone()),
            or_dash(self.age_years.map(|a| format!("{}", a))),
            self.tags.join(", "),
        ]
    }
}

/// Heading line, e.g. `Sitters: 3 of 10 | Price (Low to High) | page 1/1`.
pub fn render_heading(
    label: &str,
    summary: &ViewSummary,
    page_index: usize,
    total_pages: usize,
) -> String {
    let mut heading = format!(
        "{}: {} of {} | {} | page {}/{}",
        label,
        summary.matched,
        summary.total,
        summary.sort.display_name(),
        page_index + 1,
        total_pages
    );
    if summary.filtered_out > 0 {
        heading.push_str(&format!(" ({} filtered out)", summary.filtered_out));
    }
    heading
}

/// Renders `page` as a table preceded by a heading and active constraints.
pub fn render_table<R: TableRow>(
    label: &str,
    page: &Page<&R>,
    summary: &ViewSummary,
    constraints: &[Constraint],
    use_color: bool,
) -> String {
    let heading = render_heading(label, summary, page.page_index, page.total_pages);
    let mut output = if use_color {
        heading.blue().bold().to_string()
    } else {
        heading
    };
    output.push('\n');

    if !constraints.is_empty() {
        let names: Vec<String> = constraints.iter().map(Constraint::display_name).collect();
        let line = format!("Filters: {}", names.join(", "));
        output.push_str(&if use_color { line.dimmed().to_string() } else { line });
        output.push('\n');
    }

    if page.is_empty() {
        let line = format!("No matching {}", label.to_lowercase());
        output.push_str(&if use_color { line.yellow().to_string() } else { line });
        output.push('\n');
        return output;
    }

    let mut table = Table::new();
    table
        .load_preset(if use_color { presets::UTF8_FULL } else { presets::ASCII_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(R::headers());
    for record in &page.items {
        table.add_row(record.row());
    }

    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[derive(Serialize)]
struct JsonPage<'a, R> {
    summary: ViewSummary,
    filters: Vec<String>,
    #[serde(flatten)]
    page: &'a Page<&'a R>,
}

/// Renders `page` as pretty JSON with its summary.
pub fn render_json<R: Serialize>(
    page: &Page<&R>,
    summary: &ViewSummary,
    constraints: &[Constraint],
) -> Result<String> {
    let output = JsonPage {
        summary: *summary,
        filters: constraints.iter().map(Constraint::display_name).collect(),
        page,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
