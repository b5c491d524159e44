// crates/locpage-core/src/model.rs

//! # Location Model
//!
//! Two layers live here:
//! - the **raw rows** exactly as a location source exposes them
//!   (`States`, `Cities`, `CityZipCodes`, `Neighborhoods` tables), and
//! - the **indexed** [`LocationIndex`] built from them once at start-up.
//!
//! All index keys are folded with [`fold_key`] at insertion, so every lookup
//! is case-insensitive (and accent-insensitive).

use crate::text::fold_key;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Raw state row: `{"abbr": "TX", "name": "Texas"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRow {
    #[serde(alias = "state_abbr")]
    pub abbr: String,
    #[serde(alias = "state_name")]
    pub name: String,
}

/// Raw city row. `zip` is the city's primary zip code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRow {
    #[serde(alias = "state_abbr")]
    pub state: String,
    #[serde(alias = "city_name")]
    pub name: String,
    #[serde(default, alias = "zip_code")]
    pub zip: Option<String>,
}

/// Raw `city -> zip` row; a city usually has many.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipRow {
    #[serde(alias = "city_name")]
    pub city: String,
    #[serde(alias = "zip_code")]
    pub zip: String,
}

/// Raw `city -> neighborhood` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodRow {
    #[serde(alias = "city_name")]
    pub city: String,
    #[serde(alias = "neighborhood")]
    pub name: String,
}

/// The complete row set of a location source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRows {
    #[serde(default)]
    pub states: Vec<StateRow>,
    #[serde(default)]
    pub cities: Vec<CityRow>,
    #[serde(default)]
    pub zip_codes: Vec<ZipRow>,
    #[serde(default)]
    pub neighborhoods: Vec<NeighborhoodRow>,
}

/// A state / region entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Code as written in the source, e.g. `"TX"`.
    pub code: String,
    pub name: String,
}

/// A city entry inside a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// Primary zip code of the city, if the source has one.
    pub zip: Option<String>,
}

/// In-memory location index.
///
/// Built once from a [`LocationRows`] set and read-only afterwards; share it
/// behind an `Arc` between request handlers; no locking is needed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LocationIndex {
    /// folded state code -> state
    pub(crate) states: BTreeMap<String, State>,
    /// folded state code -> cities in source order
    pub(crate) cities_by_state: HashMap<String, Vec<City>>,
    /// folded city name -> zip codes in source order.
    /// Ordered so the substring fallback scans keys deterministically.
    pub(crate) zips_by_city: BTreeMap<String, Vec<String>>,
    /// folded city name -> neighborhood names
    pub(crate) neighborhoods_by_city: HashMap<String, Vec<String>>,
}

impl LocationIndex {
    /// Builds the index from a raw row set.
    ///
    /// Duplicate states, cities (per state), zips (per city) and
    /// neighborhoods (per city) are dropped; the first occurrence wins.
    pub fn from_rows(rows: LocationRows) -> Self {
        let mut index = LocationIndex::default();

        for row in rows.states {
            let code = row.abbr.trim();
            if code.is_empty() {
                continue;
            }
            index
                .states
                .entry(fold_key(code))
                .or_insert_with(|| State {
                    code: code.to_string(),
                    name: row.name.trim().to_string(),
                });
        }

        for row in rows.cities {
            let name = row.name.trim();
            if name.is_empty() {
                continue;
            }
            let cities = index
                .cities_by_state
                .entry(fold_key(row.state.trim()))
                .or_default();
            let key = fold_key(name);
            if cities.iter().any(|c| fold_key(&c.name) == key) {
                continue;
            }
            cities.push(City {
                name: name.to_string(),
                zip: row
                    .zip
                    .map(|z| z.trim().to_string())
                    .filter(|z| !z.is_empty()),
            });
        }

        for row in rows.zip_codes {
            let (city, zip) = (row.city.trim(), row.zip.trim());
            if city.is_empty() || zip.is_empty() {
                continue;
            }
            let zips = index.zips_by_city.entry(fold_key(city)).or_default();
            if !zips.iter().any(|z| z == zip) {
                zips.push(zip.to_string());
            }
        }

        for row in rows.neighborhoods {
            let (city, name) = (row.city.trim(), row.name.trim());
            if city.is_empty() || name.is_empty() {
                continue;
            }
            let hoods = index.neighborhoods_by_city.entry(fold_key(city)).or_default();
            if !hoods.iter().any(|n| n == name) {
                hoods.push(name.to_string());
            }
        }

        let stats = index.stats();
        info!(
            "location index built: {} states, {} cities, {} zip codes, {} neighborhoods",
            stats.states, stats.cities, stats.zip_codes, stats.neighborhoods
        );
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> LocationRows {
        serde_json::from_str(
            r#"{
                "states": [
                    {"abbr": "TX", "name": "Texas"},
                    {"state_abbr": "tx", "state_name": "Duplicate"}
                ],
                "cities": [
                    {"state": "TX", "name": "Austin", "zip": "73301"},
                    {"state_abbr": "tx", "city_name": "AUSTIN", "zip_code": "00000"},
                    {"state": "TX", "name": "Dallas"}
                ],
                "zip_codes": [
                    {"city": "Austin", "zip": "78701"},
                    {"city_name": "austin", "zip_code": "78701"},
                    {"city": "Austin", "zip": "78702"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_with_folded_keys_and_dedup() {
        let index = LocationIndex::from_rows(rows());
        assert_eq!(index.states.len(), 1);
        assert_eq!(index.states["tx"].name, "Texas");

        let cities = &index.cities_by_state["tx"];
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].zip.as_deref(), Some("73301"));
        assert_eq!(cities[1].zip, None);

        assert_eq!(index.zips_by_city["austin"], vec!["78701", "78702"]);
        assert!(index.neighborhoods_by_city.is_empty());
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let rows: LocationRows = serde_json::from_str("{}").unwrap();
        let index = LocationIndex::from_rows(rows);
        assert_eq!(index.stats().states, 0);
    }
}
