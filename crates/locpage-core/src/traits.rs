// crates/locpage-core/src/traits.rs
use crate::model::{City, State};
use crate::text::{dashed_slug, fold_key};

/// Matching a location record against what a visitor or author typed.
///
/// ```rust
/// use locpage_core::traits::NameMatch;
/// use locpage_core::City;
///
/// let city = City { name: "Winston-Salem".into(), zip: None };
/// assert!(city.is_named("WINSTON-SALEM"));
/// assert!(city.matches_segment("winston-salem"));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    /// Case- and accent-insensitive equality.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Whether a dashed host segment (`san-antonio`) names this record.
    fn matches_segment(&self, segment: &str) -> bool {
        let segment = dashed_slug(segment);
        !segment.is_empty() && dashed_slug(self.name_str()) == segment
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for State {
    fn name_str(&self) -> &str {
        &self.name
    }
}
