//! Country-name to ISO 3166-1 alpha-3 resolution
//!
//! The dataset mixes short names, legacy names, and official names for the
//! same country. A fixed alias table covers the spellings the ISO registry
//! does not resolve as written; everything else falls through to the
//! registry itself.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Dataset spellings the registry lookup cannot resolve, or resolves to the
/// wrong entry. Consulted before the registry; always wins.
static MANUAL_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("United States", "USA"),
        ("United States of America", "USA"),
        ("United Kingdom", "GBR"),
        ("UK", "GBR"),
        ("Russia", "RUS"),
        ("Russian Federation", "RUS"),
        ("South Korea", "KOR"),
        ("Korea, Republic of", "KOR"),
        ("North Korea", "PRK"),
        ("Korea, Democratic People's Republic of", "PRK"),
        ("Czech Republic", "CZE"),
        ("Czechia", "CZE"),
        ("Iran", "IRN"),
        ("Iran, Islamic Republic of", "IRN"),
        ("Venezuela", "VEN"),
        ("Venezuela, Bolivarian Republic of", "VEN"),
        ("Bolivia", "BOL"),
        ("Bolivia, Plurinational State of", "BOL"),
        ("Taiwan", "TWN"),
        ("Taiwan, Province of China", "TWN"),
        ("Moldova", "MDA"),
        ("Moldova, Republic of", "MDA"),
        ("Vietnam", "VNM"),
        ("Viet Nam", "VNM"),
        ("Macedonia", "MKD"),
        ("North Macedonia", "MKD"),
        ("The Former Yugoslav Republic of Macedonia", "MKD"),
    ])
});

/// Resolve a country name to its alpha-3 code, or `None` if neither the
/// alias table nor the registry knows it. Failures are per-row exclusions
/// for the caller, never errors.
pub fn resolve(country_name: &str) -> Option<&'static str> {
    if let Some(&code) = MANUAL_ALIASES.get(country_name) {
        return Some(code);
    }
    registry_lookup(country_name)
}

/// Registry lookup by alpha-3 code, alpha-2 code, then name
/// (exact, then case-insensitive).
fn registry_lookup(name: &str) -> Option<&'static str> {
    let upper = name.to_uppercase();
    if let Some(country) = rust_iso3166::from_alpha3(&upper) {
        return Some(country.alpha3);
    }
    if let Some(country) = rust_iso3166::from_alpha2(&upper) {
        return Some(country.alpha3);
    }
    if let Some(country) = rust_iso3166::ALL.iter().find(|c| c.name == name) {
        return Some(country.alpha3);
    }
    let lower = name.to_lowercase();
    rust_iso3166::ALL
        .iter()
        .find(|c| c.name.to_lowercase() == lower)
        .map(|c| c.alpha3)
}
