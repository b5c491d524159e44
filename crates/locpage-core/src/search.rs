// crates/locpage-core/src/search.rs

//! Read-only queries over a built [`LocationIndex`].
//!
//! Unknown keys never error: they answer `None` or an empty list, and the
//! page resolver turns that into a not-found page.

use crate::common::DbStats;
use crate::model::{City, LocationIndex, State};
use crate::text::fold_key;
use crate::traits::NameMatch;
use log::debug;

impl LocationIndex {
    pub fn stats(&self) -> DbStats {
        DbStats {
            states: self.states.len(),
            cities: self.cities_by_state.values().map(Vec::len).sum(),
            zip_codes: self.zips_by_city.values().map(Vec::len).sum(),
            neighborhoods: self.neighborhoods_by_city.values().map(Vec::len).sum(),
        }
    }

    /// All states ordered by (folded) code.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    pub fn state(&self, code: &str) -> Option<&State> {
        self.states.get(&fold_key(code.trim()))
    }

    /// Full name of a state code (`"tx"` -> `"Texas"`).
    pub fn state_name(&self, code: &str) -> Option<&str> {
        self.state(code).map(|s| s.name.as_str())
    }

    pub fn state_exists(&self, code: &str) -> bool {
        self.state(code).is_some()
    }

    /// City records of a state, in source order.
    pub fn cities(&self, code: &str) -> &[City] {
        self.cities_by_state
            .get(&fold_key(code.trim()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// City names of a state, in source order.
    pub fn cities_in_state(&self, code: &str) -> Vec<&str> {
        self.cities(code).iter().map(|c| c.name.as_str()).collect()
    }

    /// Resolves a dashed host segment (`"san-antonio"`) to a city of `state`.
    ///
    /// Both sides are compared in [`dashed_slug`](crate::text::dashed_slug) form, so `"Winston-Salem"`
    /// and `"O'Fallon"` resolve from `winston-salem` and `o-fallon`.
    pub fn city(&self, state: &str, segment: &str) -> Option<&City> {
        self.cities(state).iter().find(|c| c.matches_segment(segment))
    }

    /// Zip codes of a city.
    ///
    /// Exact (folded) name match first. Otherwise the first cached city key,
    /// in key order, that contains the query or is contained by it wins:
    /// `"new york"` finds `"new york city"`. The fallback can pick an
    /// unrelated city when names nest (`"greenville"` / `"east greenville"`).
    pub fn zip_codes_for_city(&self, name: &str) -> &[String] {
        let key = fold_key(name.trim());
        if key.is_empty() {
            return &[];
        }
        if let Some(zips) = self.zips_by_city.get(&key) {
            return zips;
        }
        match self
            .zips_by_city
            .iter()
            .find(|(cached, _)| cached.contains(&key) || key.contains(cached.as_str()))
        {
            Some((cached, zips)) => {
                debug!("zip lookup for {key:?} fell back to {cached:?}");
                zips
            }
            None => &[],
        }
    }

    /// Neighborhood names of a city (exact folded match only).
    pub fn neighborhoods(&self, city: &str) -> &[String] {
        self.neighborhoods_by_city
            .get(&fold_key(city.trim()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Other cities of `code`, alphabetical, without `exclude_city`.
    pub fn other_cities_in_state(&self, code: &str, exclude_city: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .cities(code)
            .iter()
            .filter(|c| !c.is_named(exclude_city))
            .map(|c| c.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
