// crates/locpage-core/src/host.rs

//! # Subdomain Parser
//!
//! Three host formats have been in use over time:
//!
//! | segments | host                          | meaning                 |
//! |----------|-------------------------------|-------------------------|
//! | 1        | `tx.example.com`              | state page              |
//! | 2        | `austin-tx.example.com`       | legacy city page        |
//! | ≥3       | `plumbing-austin-tx.example.com` | service + city + state |
//!
//! [`parse`] only understands the current (≥3) form; [`classify`] keeps all
//! three apart for callers that key behaviour off the segment count.

use serde::{Deserialize, Serialize};

/// `(service, city, state)` as written in the host, lower-cased.
///
/// Either all three parts are present or none are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdomainTriple {
    pub service: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl SubdomainTriple {
    pub fn absent() -> Self {
        Self::default()
    }

    /// `Some((service, city, state))` when all three parts are present.
    pub fn parts(&self) -> Option<(&str, &str, &str)> {
        match (&self.service, &self.city, &self.state) {
            (Some(service), Some(city), Some(state)) => Some((service, city, state)),
            _ => None,
        }
    }

    pub fn is_resolvable(&self) -> bool {
        self.parts().is_some()
    }
}

/// Host classified by format version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKind {
    /// `example.com` or `www.example.com`.
    Apex,
    /// `tx.example.com`
    State(String),
    /// `austin-tx.example.com`; `city` is still dashed.
    LegacyCityState { city: String, state: String },
    /// `plumbing-austin-tx.example.com`
    ServiceCityState(SubdomainTriple),
    /// A subdomain with empty segments (`-tx`, `austin--`).
    Invalid,
}

/// Lower-cases the host and strips a port and a trailing dot.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host.split_once(':').map_or(host, |(h, _)| h);
    host.trim_end_matches('.').to_ascii_lowercase()
}

/// The last two DNS labels of the host; also the tenant key.
pub fn apex_domain(host: &str) -> String {
    let host = normalize_host(host);
    let labels: Vec<&str> = host.split('.').collect();
    let start = labels.len().saturating_sub(2);
    labels[start..].join(".")
}

fn leftmost_label(host: &str) -> &str {
    host.split('.').next().unwrap_or_default()
}

/// Splits the leftmost label of `host` into a [`SubdomainTriple`].
///
/// With three or more dash separated segments the first is the service, the
/// last the state, and everything between (re-joined with `-`) the city.
/// Fewer segments, or an empty part, yield an all-absent triple.
///
/// ```rust
/// use locpage_core::host::parse;
///
/// let t = parse("plumbing-san-antonio-tx.example.com");
/// assert_eq!(t.parts(), Some(("plumbing", "san-antonio", "tx")));
/// assert!(!parse("austin-tx.example.com").is_resolvable());
/// ```
pub fn parse(host: &str) -> SubdomainTriple {
    let host = normalize_host(host);
    let segments: Vec<&str> = leftmost_label(&host).split('-').collect();
    if segments.len() < 3 {
        return SubdomainTriple::absent();
    }

    let service = segments[0];
    let state = segments[segments.len() - 1];
    let city = segments[1..segments.len() - 1].join("-");
    if service.is_empty() || state.is_empty() || city.split('-').any(str::is_empty) {
        return SubdomainTriple::absent();
    }

    SubdomainTriple {
        service: Some(service.to_string()),
        city: Some(city),
        state: Some(state.to_string()),
    }
}

/// Classifies `host` by segment count of its leftmost label.
///
/// Hosts with at most two labels (and `www.` + two labels) are the apex.
pub fn classify(host: &str) -> HostKind {
    let host = normalize_host(host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 || (labels.len() == 3 && labels[0] == "www") {
        return HostKind::Apex;
    }

    let segments: Vec<&str> = labels[0].split('-').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return HostKind::Invalid;
    }
    match segments.as_slice() {
        [state] => HostKind::State((*state).to_string()),
        [city, state] => HostKind::LegacyCityState {
            city: (*city).to_string(),
            state: (*state).to_string(),
        },
        _ => {
            let triple = parse(&host);
            if triple.is_resolvable() {
                HostKind::ServiceCityState(triple)
            } else {
                HostKind::Invalid
            }
        }
    }
}
