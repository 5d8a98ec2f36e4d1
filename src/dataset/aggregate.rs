//! Summary tables over the expanded record set
//!
//! Built once at startup and held read-only for the life of the process.

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::dataset::normalize::MovieRecord;
use crate::dataset::regions;

/// Per-country production totals, one row per map-eligible country name.
#[derive(Debug, Clone)]
pub struct CountrySummary {
    pub country: String,
    pub movie_count: u64,
    /// ISO 3166-1 alpha-3 code keying the choropleth
    pub region_code: &'static str,
    /// log10(movie_count + 1); finite for any movie_count >= 0
    pub log_movie_count: f64,
}

/// Grouped count of expanded records, unique per (country, genre).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub country: String,
    pub genre: String,
    pub count: u64,
}

/// The read-only tables the dashboard serves from.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Sorted by country name. Countries without a region code are absent.
    pub summary: Vec<CountrySummary>,
    /// Sorted by (country, genre). Includes countries without a region code.
    pub genre_counts: Vec<GenreCount>,
    /// region code -> index of the first summary row carrying that code
    by_region: HashMap<&'static str, usize>,
}

impl Tables {
    pub fn new(summary: Vec<CountrySummary>, genre_counts: Vec<GenreCount>) -> Self {
        let mut by_region = HashMap::new();
        for (idx, row) in summary.iter().enumerate() {
            // Several dataset spellings can share one code ("USA" and
            // "United States"); the first row wins the map key.
            by_region.entry(row.region_code).or_insert(idx);
        }
        Self {
            summary,
            genre_counts,
            by_region,
        }
    }

    /// Summary row for a clicked region code, if the code is on the map.
    pub fn country_for_region(&self, region_code: &str) -> Option<&CountrySummary> {
        self.by_region
            .get(region_code)
            .map(|&idx| &self.summary[idx])
    }

    /// Genre rows for one country, in grouping order.
    pub fn genres_for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a GenreCount> {
        self.genre_counts
            .iter()
            .filter(move |row| row.country == country)
    }
}

/// Group the expanded records into the two summary tables.
///
/// Countries that resolve to no region code are excluded from `summary`
/// (they cannot be drawn) but keep their rows in `genre_counts`.
pub fn build_tables(records: &[MovieRecord]) -> Tables {
    let mut genre_tally: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let mut country_tally: BTreeMap<&str, u64> = BTreeMap::new();

    for record in records {
        *genre_tally
            .entry((record.country.as_str(), record.genre.as_str()))
            .or_default() += 1;
        *country_tally.entry(record.country.as_str()).or_default() += 1;
    }

    let genre_counts = genre_tally
        .into_iter()
        .map(|((country, genre), count)| GenreCount {
            country: country.to_string(),
            genre: genre.to_string(),
            count,
        })
        .collect();

    let mut summary = Vec::new();
    for (country, movie_count) in country_tally {
        let Some(region_code) = regions::resolve(country) else {
            debug!("No region code for {country:?}; excluded from the map");
            continue;
        };
        summary.push(CountrySummary {
            country: country.to_string(),
            movie_count,
            region_code,
            log_movie_count: ((movie_count + 1) as f64).log10(),
        });
    }

    Tables::new(summary, genre_counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, genre: &str) -> MovieRecord {
        MovieRecord {
            title: "t".to_string(),
            country: country.to_string(),
            genre: genre.to_string(),
        }
    }

    #[test]
    fn counts_match_expanded_records() {
        let records = vec![
            record("France", "Drama"),
            record("France", "Drama"),
            record("France", "Comedy"),
            record("Japan", "Drama"),
        ];
        let tables = build_tables(&records);

        let france = tables
            .summary
            .iter()
            .find(|row| row.country == "France")
            .unwrap();
        assert_eq!(france.movie_count, 3);
        assert_eq!(france.region_code, "FRA");
        assert!((france.log_movie_count - 4.0_f64.log10()).abs() < 1e-12);

        let drama = tables
            .genre_counts
            .iter()
            .find(|row| row.country == "France" && row.genre == "Drama")
            .unwrap();
        assert_eq!(drama.count, 2);
    }

    #[test]
    fn unresolved_country_dropped_from_summary_only() {
        let records = vec![record("Atlantis", "Fantasy"), record("Japan", "Drama")];
        let tables = build_tables(&records);

        assert!(tables.summary.iter().all(|row| row.country != "Atlantis"));
        assert!(tables
            .genre_counts
            .iter()
            .any(|row| row.country == "Atlantis" && row.count == 1));
    }

    #[test]
    fn genre_counts_ordered_by_country_then_genre() {
        let records = vec![
            record("Japan", "Drama"),
            record("France", "Romance"),
            record("France", "Comedy"),
        ];
        let tables = build_tables(&records);
        let keys: Vec<(&str, &str)> = tables
            .genre_counts
            .iter()
            .map(|row| (row.country.as_str(), row.genre.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("France", "Comedy"),
                ("France", "Romance"),
                ("Japan", "Drama"),
            ]
        );
    }

    #[test]
    fn first_summary_row_wins_shared_region_code() {
        // "USA" sorts before "United States"; both carry code USA.
        let records = vec![record("United States", "Drama"), record("USA", "Comedy")];
        let tables = build_tables(&records);

        assert_eq!(tables.summary.len(), 2);
        let hit = tables.country_for_region("USA").unwrap();
        assert_eq!(hit.country, "USA");
    }

    #[test]
    fn unknown_region_code_is_none() {
        let tables = build_tables(&[record("Japan", "Drama")]);
        assert!(tables.country_for_region("ZZZ").is_none());
    }
}
