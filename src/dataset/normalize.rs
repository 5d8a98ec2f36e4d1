//! Raw CSV rows to expanded (country, genre) records
//!
//! Each raw row may list several production countries and several genres as
//! comma-separated strings. A row expands into the full cross product of its
//! country tokens and genre tokens, one record per pair.

use crate::Result;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// A known contaminated row in the upstream export, excluded outright.
pub const BAD_TITLE: &str = "IPL 2025";

/// Placeholder genre for rows that list countries but no genres.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Raw CSV row. Extra columns in the file are ignored.
#[derive(Debug, Deserialize)]
pub struct RawMovieRow {
    pub title: Option<String>,
    pub production_countries: Option<String>,
    pub genres: Option<String>,
}

/// One (country, genre) pair from the cross-product expansion of a raw row.
///
/// Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub country: String,
    pub genre: String,
}

/// Diagnostics from a normalization pass, logged once after load.
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub total_rows: usize,
    pub parse_errors: usize,
    pub dropped_bad_title: usize,
    pub dropped_empty_country: usize,
    pub expanded_records: usize,
}

/// Load and normalize the dataset file.
pub fn load_records(path: &Path) -> Result<(Vec<MovieRecord>, NormalizeReport)> {
    let rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    Ok(normalize_rows(rdr))
}

/// Normalize CSV content from any reader (used by tests and by `load_records`).
pub fn normalize_csv(reader: impl io::Read) -> (Vec<MovieRecord>, NormalizeReport) {
    normalize_rows(csv::ReaderBuilder::new().flexible(true).from_reader(reader))
}

fn normalize_rows<R: io::Read>(mut rdr: csv::Reader<R>) -> (Vec<MovieRecord>, NormalizeReport) {
    let mut report = NormalizeReport::default();
    let mut records = Vec::new();

    for result in rdr.deserialize::<RawMovieRow>() {
        report.total_rows += 1;
        // Rows that fail to deserialize are a data-quality exclusion, not fatal.
        let row = match result {
            Ok(row) => row,
            Err(_) => {
                report.parse_errors += 1;
                continue;
            }
        };
        expand_row(&row, &mut records, &mut report);
    }

    report.expanded_records = records.len();
    (records, report)
}

/// Expand one raw row into its (country, genre) cross product.
fn expand_row(row: &RawMovieRow, out: &mut Vec<MovieRecord>, report: &mut NormalizeReport) {
    let title = row.title.as_deref().unwrap_or("");
    if title == BAD_TITLE {
        report.dropped_bad_title += 1;
        return;
    }

    let countries = match row.production_countries.as_deref().map(split_tokens) {
        Some(countries) if !countries.is_empty() => countries,
        _ => {
            report.dropped_empty_country += 1;
            return;
        }
    };

    // A row with a valid country but no genres still counts toward its
    // countries' totals, filed under a placeholder genre.
    let genres = match row.genres.as_deref().map(split_tokens) {
        Some(genres) if !genres.is_empty() => genres,
        _ => vec![UNKNOWN_GENRE.to_string()],
    };

    for country in &countries {
        for genre in &genres {
            out.push(MovieRecord {
                title: title.to_string(),
                country: country.clone(),
                genre: genre.clone(),
            });
        }
    }
}

/// Split a multi-valued field on commas, trimming tokens and dropping empties.
fn split_tokens(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
