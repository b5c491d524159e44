// crates/locpage-core/src/content/mod.rs

//! # Content Loader / Merger
//!
//! A tenant (one site, keyed by its apex domain) owns three JSON documents.
//! [`load_tenant`] fetches all three independently: a document that fails
//! to load becomes empty and the others still load. Right after fetching,
//! every document is normalized into the canonical types below so nothing
//! downstream sees schema drift.

mod normalize;
mod source;

pub use source::{DirectorySource, DocumentKind, DocumentSource, MemorySource};

use crate::text::{equals_folded, host_slug};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const COMPANY_NAME: &str = "Company Name";
pub const PHONE_PLACEHOLDER: &str = "Phone No. Placeholder";
pub const MAIN_SERVICE: &str = "Main Service";
pub const FAVICON: &str = "favicon";
pub const ADDRESS_TEMPLATE: &str = "Address Template";
pub const META_TITLE: &str = "Meta Title";
pub const META_DESCRIPTION: &str = "Meta Description";

pub const DEFAULT_ADDRESS_TEMPLATE: &str = "[Company Name], [City], [State] [zipcode]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Review {
    pub name: String,
    pub review: String,
}

/// Business facts from the `required` document (scalar fields only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredFacts(pub BTreeMap<String, String>);

impl RequiredFacts {
    /// Value of `key` as authored, empty strings included.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Non-empty value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn company_name(&self) -> Option<&str> {
        self.get(COMPANY_NAME)
    }

    pub fn phone(&self) -> Option<&str> {
        self.get(PHONE_PLACEHOLDER)
    }

    pub fn main_service(&self) -> Option<&str> {
        self.get(MAIN_SERVICE)
    }

    pub fn favicon(&self) -> Option<&str> {
        self.get(FAVICON)
    }

    pub fn address_template(&self) -> &str {
        self.get(ADDRESS_TEMPLATE).unwrap_or(DEFAULT_ADDRESS_TEMPLATE)
    }
}

/// The `mainContent` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainContent {
    /// Scalar top-level fields (`Title`, `Heading 1`, ...).
    pub texts: BTreeMap<String, String>,
    /// Nested objects such as `CTA` or `About`, scalar fields only.
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
    pub faqs: Vec<Faq>,
    pub reviews: Vec<Review>,
}

impl MainContent {
    /// Non-empty top-level text of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn section(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(key)
    }
}

/// One entry of the service catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    /// Path segment of the service page, without slashes.
    pub slug: String,
    pub description: String,
    pub why_choose_us: String,
    pub why_you_need: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub faqs: Vec<Faq>,
    pub reviews: Vec<Review>,
}

impl ServiceRecord {
    /// The dash-free label used as the first host segment.
    pub fn host_slug(&self) -> String {
        host_slug(&self.slug)
    }
}

/// Merged, normalized content of one tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantContent {
    pub tenant: String,
    pub required: RequiredFacts,
    pub main_content: MainContent,
    pub services: Vec<ServiceRecord>,
}

impl TenantContent {
    /// Catalog entry whose path slug equals `slug` (case-insensitive).
    pub fn service_by_slug(&self, slug: &str) -> Option<&ServiceRecord> {
        let slug = slug.trim_matches('/');
        self.services.iter().find(|s| equals_folded(&s.slug, slug))
    }

    /// Catalog entry matching the service label of a host.
    ///
    /// Compares dash-free forms of the slug and of the name, so
    /// `waterdamage` finds a service with slug `water-damage`.
    pub fn service_by_host_label(&self, label: &str) -> Option<&ServiceRecord> {
        let label = host_slug(label);
        if label.is_empty() {
            return None;
        }
        self.services
            .iter()
            .find(|s| s.host_slug() == label || host_slug(&s.name) == label)
    }

    /// Dash-free service label used when generating city links.
    ///
    /// The main service wins, then the first catalog entry.
    pub fn default_service_label(&self) -> Option<String> {
        self.required
            .main_service()
            .map(host_slug)
            .or_else(|| self.services.first().map(ServiceRecord::host_slug))
            .filter(|s| !s.is_empty())
    }
}

/// Fetches and normalizes the three documents of `tenant`.
///
/// Never fails: a document that cannot be fetched is logged and treated
/// as empty.
pub fn load_tenant(source: &dyn DocumentSource, tenant: &str) -> TenantContent {
    let fetch = |kind: DocumentKind| match source.fetch(tenant, kind) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("tenant {tenant}: {kind} document unavailable, using empty: {e}");
            Value::Null
        }
    };

    let required = normalize::required(fetch(DocumentKind::Required));
    let main_content = normalize::main_content(fetch(DocumentKind::MainContent));
    let services = normalize::services(fetch(DocumentKind::Services));
    debug!(
        "tenant {tenant}: {} required facts, {} services",
        required.0.len(),
        services.len()
    );

    TenantContent {
        tenant: tenant.to_string(),
        required,
        main_content,
        services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PageError, Result};
    use serde_json::json;

    struct FailingServices(MemorySource);

    impl DocumentSource for FailingServices {
        fn fetch(&self, tenant: &str, kind: DocumentKind) -> Result<Value> {
            if kind == DocumentKind::Services {
                return Err(PageError::Io(std::io::Error::other("disk on fire")));
            }
            self.0.fetch(tenant, kind)
        }
    }

    fn memory() -> MemorySource {
        MemorySource::new()
            .with(
                "example.com",
                DocumentKind::Required,
                json!({"Company Name": "Acme", "Phone No. Placeholder": 5551234, "Main Service": "Water Damage"}),
            )
            .with(
                "example.com",
                DocumentKind::MainContent,
                json!({"Title": "[Service] in [City]", "Reviews": [{"Name": "Bo", "Review": "Fast"}]}),
            )
            .with(
                "example.com",
                DocumentKind::Services,
                json!([{"name": "Water Damage", "slug": "water-damage"}, {"name": "Mold Removal"}]),
            )
    }

    #[test]
    fn loads_and_normalizes_all_documents() {
        let content = load_tenant(&memory(), "example.com");
        assert_eq!(content.required.company_name(), Some("Acme"));
        assert_eq!(content.required.phone(), Some("5551234"));
        assert_eq!(content.main_content.text("Title"), Some("[Service] in [City]"));
        assert_eq!(content.main_content.reviews[0].review, "Fast");
        assert_eq!(content.services.len(), 2);
    }

    #[test]
    fn one_failed_document_leaves_the_others() {
        let content = load_tenant(&FailingServices(memory()), "example.com");
        assert!(content.services.is_empty());
        assert_eq!(content.required.company_name(), Some("Acme"));
        assert!(content.main_content.text("Title").is_some());
    }

    #[test]
    fn unknown_tenant_is_entirely_empty() {
        let content = load_tenant(&memory(), "nobody.com");
        assert_eq!(content.tenant, "nobody.com");
        assert_eq!(content.required, RequiredFacts::default());
        assert!(content.services.is_empty());
    }

    #[test]
    fn service_lookups() {
        let content = load_tenant(&memory(), "example.com");
        assert_eq!(content.service_by_slug("/Water-Damage").unwrap().name, "Water Damage");
        assert!(content.service_by_slug("roofing").is_none());
        assert_eq!(content.service_by_host_label("waterdamage").unwrap().slug, "water-damage");
        assert_eq!(content.service_by_host_label("moldremoval").unwrap().name, "Mold Removal");
        assert_eq!(content.default_service_label().as_deref(), Some("waterdamage"));
    }

    #[test]
    fn address_template_has_default() {
        assert_eq!(RequiredFacts::default().address_template(), DEFAULT_ADDRESS_TEMPLATE);
    }
}
