// crates/locpage-core/src/content/source.rs

//! Where tenant documents come from. The engine only needs parsed JSON
//! values; reading and caching them is the source's business.

use crate::error::{PageError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// The three documents every tenant bundle consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Business facts: name, phone, address template, favicon.
    Required,
    /// Page-level prose, FAQ list, review list, CTA block.
    MainContent,
    /// The service catalog.
    Services,
}

impl DocumentKind {
    /// File stem used by [`DirectorySource`].
    pub fn stem(self) -> &'static str {
        match self {
            DocumentKind::Required => "required",
            DocumentKind::MainContent => "mainContent",
            DocumentKind::Services => "services",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Supplies raw tenant documents.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, tenant: &str, kind: DocumentKind) -> Result<Value>;
}

/// Reads `<root>/<tenant>/<stem>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, tenant: &str, kind: DocumentKind) -> Result<PathBuf> {
        if tenant.is_empty()
            || tenant.starts_with('.')
            || tenant.contains(['/', '\\'])
            || tenant.contains("..")
        {
            return Err(PageError::not_found(format!("tenant {tenant:?}")));
        }
        Ok(self.root.join(tenant).join(format!("{}.json", kind.stem())))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, tenant: &str, kind: DocumentKind) -> Result<Value> {
        let path = self.path_for(tenant, kind)?;
        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// In-memory documents, keyed by tenant and kind.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<(String, DocumentKind), Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tenant: impl Into<String>, kind: DocumentKind, doc: Value) {
        self.docs.insert((tenant.into(), kind), doc);
    }

    pub fn with(mut self, tenant: impl Into<String>, kind: DocumentKind, doc: Value) -> Self {
        self.insert(tenant, kind, doc);
        self
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, tenant: &str, kind: DocumentKind) -> Result<Value> {
        self.docs
            .get(&(tenant.to_string(), kind))
            .cloned()
            .ok_or_else(|| PageError::not_found(format!("{tenant}/{kind}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn directory_source_rejects_path_tricks() {
        let src = DirectorySource::new("/srv/tenants");
        assert!(src.path_for("../etc", DocumentKind::Required).is_err());
        assert!(src.path_for("a/b", DocumentKind::Required).is_err());
        assert!(src.path_for("", DocumentKind::Required).is_err());
        assert_eq!(
            src.path_for("example.com", DocumentKind::MainContent).unwrap(),
            PathBuf::from("/srv/tenants/example.com/mainContent.json")
        );
    }

    #[test]
    fn memory_source_misses_are_not_found() {
        let src = MemorySource::new().with("example.com", DocumentKind::Required, json!({}));
        assert!(src.fetch("example.com", DocumentKind::Required).is_ok());
        assert!(src
            .fetch("example.com", DocumentKind::Services)
            .unwrap_err()
            .is_not_found());
    }
}
