//! Dataset pipeline: fetch the CSV once, normalize it into expanded
//! (country, genre) records, and build the read-only summary tables the
//! dashboard serves from.

pub mod aggregate;
pub mod fetch;
pub mod normalize;
pub mod regions;

pub use aggregate::{build_tables, CountrySummary, GenreCount, Tables};
pub use normalize::{MovieRecord, NormalizeReport};
