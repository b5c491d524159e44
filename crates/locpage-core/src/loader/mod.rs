// crates/locpage-core/src/loader/mod.rs

//! # Location Loader
//!
//! Handles the physical layer (I/O, decompression) and hands the row set to
//! [`LocationIndex::from_rows`]. A source that cannot be read or parsed is
//! fatal: the caller should refuse to start.

use crate::error::Result;
use crate::model::{LocationIndex, LocationRows};
#[cfg(feature = "binary")]
use log::debug;
use log::info;
use std::io::Read;
use std::path::Path;

mod common_io;
#[cfg(feature = "binary")]
mod snapshot;

pub use common_io::get_cache_path;

/// Suffix of the bincode snapshot written next to a JSON source.
pub const CACHE_SUFFIX: &str = "bin";

impl LocationIndex {
    /// Loads the index from `path`.
    ///
    /// - `*.bin` is read as a bincode snapshot (feature `binary`).
    /// - `*.json.gz` is decompressed first (feature `compact`).
    /// - anything else is parsed as a JSON [`LocationRows`] document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if is_snapshot(path) {
            return Self::load_snapshot(path);
        }
        let reader = common_io::open_stream(path)?;
        let index = Self::from_reader(reader)?;
        info!("loaded location source {}", path.display());
        Ok(index)
    }

    /// Parses a JSON row set from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let rows: LocationRows = serde_json::from_reader(reader)?;
        Ok(Self::from_rows(rows))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let rows: LocationRows = serde_json::from_str(s)?;
        Ok(Self::from_rows(rows))
    }

    /// Loads a JSON source through a bincode snapshot kept next to it.
    ///
    /// - Tries `<source>.bin` first.
    /// - If that fails, parses the source and writes the snapshot
    ///   (best-effort; write errors are ignored).
    #[cfg(feature = "binary")]
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let bin_path = get_cache_path(source, CACHE_SUFFIX);

        match Self::load_snapshot(&bin_path) {
            Ok(index) => return Ok(index),
            Err(e) => debug!("no usable snapshot at {}: {e}", bin_path.display()),
        }

        let index = Self::load(source)?;
        if let Err(e) = index.save_snapshot(&bin_path) {
            debug!("could not write snapshot {}: {e}", bin_path.display());
        }
        Ok(index)
    }

    #[cfg(not(feature = "binary"))]
    fn load_snapshot(path: &Path) -> Result<Self> {
        Err(crate::error::PageError::InvalidSource(format!(
            "{} is a binary snapshot but the `binary` feature is disabled",
            path.display()
        )))
    }
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CACHE_SUFFIX))
}
