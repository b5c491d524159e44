// crates/locpage-core/src/loader/snapshot.rs
use crate::error::{PageError, Result};
use crate::model::LocationIndex;
use bincode::Options;
use std::path::Path;

/// Upper bound for snapshot payloads; guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl LocationIndex {
    /// Reconstructs an index from snapshot bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    pub(crate) fn load_snapshot(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            PageError::InvalidSource(format!("snapshot not found at {}: {e}", path.display()))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Writes a bincode snapshot that [`LocationIndex::load`] reads back.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_bytes()?)?;
        Ok(())
    }
}
