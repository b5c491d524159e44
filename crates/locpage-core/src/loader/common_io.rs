// crates/locpage-core/src/loader/common_io.rs
use crate::error::{PageError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`. The caller never sees the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PageError::InvalidSource(format!("location source not found at {}: {e}", path.display()))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PageError::InvalidSource(format!(
            "{} is gzip compressed but the `compact` feature is disabled",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `locations.json.gz` -> `locations.json.gz.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/locations.json.gz"), "bin");
        assert_eq!(p, PathBuf::from("/data/locations.json.gz.bin"));
    }

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip(Path::new("a.json.GZ")));
        assert!(!is_gzip(Path::new("a.json")));
    }
}
