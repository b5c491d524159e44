// crates/locpage-core/src/lib.rs

//! Location-specific landing pages for multi-tenant service sites.
//!
//! A request for `plumbing-austin-tx.example.com/about` is resolved against
//! an in-memory [`LocationIndex`], the tenant's content documents and a
//! deterministic [`TemplateEngine`] into a [`PageViewModel`].

pub mod common;
pub mod config;
pub mod content; // required / mainContent / services documents
pub mod error;
pub mod host;
pub mod loader;
pub mod model;
pub mod page;
pub mod search; // queries over LocationIndex
pub mod template;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::config::EngineConfig;
pub use crate::content::{
    load_tenant, DirectorySource, DocumentKind, DocumentSource, MemorySource, TenantContent,
};
pub use crate::error::{PageError, Result};
pub use crate::host::{classify, parse, HostKind, SubdomainTriple};
pub use crate::model::{City, LocationIndex, LocationRows, State};
pub use crate::page::{PageRequest, PageResolver, PageViewModel};
pub use crate::template::{SeedCache, TemplateContext, TemplateEngine};

/// Everything a typical caller needs, in one import.
pub mod prelude {
    pub use crate::{
        classify, load_tenant, parse, DbStats, DirectorySource, DocumentKind, DocumentSource,
        EngineConfig, HostKind, LocationIndex, MemorySource, PageError, PageRequest, PageResolver,
        PageViewModel, Result, SubdomainTriple, TemplateContext, TemplateEngine, TenantContent,
    };
}
