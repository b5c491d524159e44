// crates/locpage-core/src/config.rs

//! Engine tunables.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields [`EngineConfig::default`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many rotated "nearby" cities a city page shows.
    pub nearby_city_limit: usize,
    /// How many FAQs a city page shows, in document order.
    pub faq_limit: usize,
    /// Serve `city-state.<apex>` hosts as city pages using the main service.
    pub legacy_city_hosts: bool,
    /// Scheme used for generated links.
    pub scheme: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nearby_city_limit: 10,
            faq_limit: 5,
            legacy_city_hosts: false,
            scheme: "https".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.nearby_city_limit, 10);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{"legacy_city_hosts": true, "faq_limit": 2}"#)
            .unwrap();
        assert!(cfg.legacy_city_hosts);
        assert_eq!(cfg.faq_limit, 2);
        assert_eq!(cfg.scheme, "https");
    }
}
