use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`LocationIndex`](crate::LocationIndex).
///
/// Counts reflect the materialized in-memory index after deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub states: usize,
    pub cities: usize,
    pub zip_codes: usize,
    pub neighborhoods: usize,
}
