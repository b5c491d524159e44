// crates/locpage-core/src/page/mod.rs

//! # Page Resolver
//!
//! Glues the other components together for one request:
//! host → [`classify`] → [`LocationIndex`] → [`TenantContent`] →
//! [`TemplateEngine`] → [`PageViewModel`].
//!
//! | host form                  | `/`   | `/about` `/contact` `/services` `/<slug>` |
//! |----------------------------|-------|-------------------------------------------|
//! | apex / `www.`              | home  | not found                                 |
//! | `tx.`                      | state | not found                                 |
//! | `austin-tx.` (legacy)      | city¹ | location pages¹                           |
//! | `plumbing-austin-tx.`      | city  | location pages                            |
//!
//! ¹ only with [`EngineConfig::legacy_city_hosts`].

mod links;
mod location;
mod nearby;
pub mod view;

pub use links::{map_embed, neighborhood_map, Links};
pub use location::ResolvedLocation;
pub use nearby::rotate_nearby;
pub use view::*;

use crate::config::EngineConfig;
use crate::content::{
    load_tenant, DocumentSource, Faq, Review, TenantContent, META_DESCRIPTION, META_TITLE,
};
use crate::error::{PageError, Result};
use crate::host::{apex_domain, classify, normalize_host, HostKind};
use crate::model::LocationIndex;
use crate::template::{TemplateContext, TemplateEngine};
use crate::text::title_case;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

const HOME_TITLE: &str = "[Company Name]";
const HOME_DESCRIPTION: &str = "[Company Name] serves every state.";
const STATE_TITLE: &str = "[Company Name] in [State Full]";
const STATE_DESCRIPTION: &str = "Find [Company Name] near you in [State Full].";
const CITY_TITLE: &str = "[Service] in [City-State]";
const CITY_DESCRIPTION: &str = "Trusted [service] in [City-State].";
const SERVICE_TITLE: &str = "[Service] in [City-State]";
const SERVICE_DESCRIPTION: &str = "Professional [service] in [City-State].";
const ABOUT_TITLE: &str = "About [Company Name]";
const ABOUT_DESCRIPTION: &str = "Learn about [Company Name] in [City-State].";
const CONTACT_TITLE: &str = "Contact [Company Name]";
const CONTACT_DESCRIPTION: &str = "Contact [Company Name] in [City-State].";
const SERVICES_TITLE: &str = "Services in [City], [State]";
const SERVICES_DESCRIPTION: &str = "Explore all services offered in [City], [State].";

/// One incoming page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub host: String,
    pub path: String,
}

impl PageRequest {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }
}

/// Path part of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    About,
    Contact,
    Services,
    Service(&'a str),
}

impl<'a> Route<'a> {
    /// `None` for paths with more than one segment.
    pub fn parse(path: &'a str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Some(Route::Root);
        }
        if path.contains('/') {
            return None;
        }
        Some(match path {
            "about" => Route::About,
            "contact" => Route::Contact,
            "services" => Route::Services,
            slug => Route::Service(slug),
        })
    }

    /// Canonical path, as used in canonical URLs.
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Services => "/services".to_string(),
            Route::Service(slug) => format!("/{slug}"),
        }
    }
}

/// Per-request values shared by all page builders.
struct Request<'a> {
    host: &'a str,
    path: String,
    links: Links<'a>,
    content: &'a TenantContent,
}

/// A resolved city host: location plus the service it advertises.
struct Site {
    location: ResolvedLocation,
    /// Host label for generated city links; `None` on legacy hosts.
    service_label: Option<String>,
    service_name: String,
}

/// Runs text fields of one page through the engine with one context.
struct Substituter<'a> {
    engine: &'a TemplateEngine,
    ctx: TemplateContext<'a>,
}

impl Substituter<'_> {
    fn text(&self, text: &str) -> String {
        self.engine.substitute(text, &self.ctx)
    }

    fn map<'m>(
        &self,
        fields: impl IntoIterator<Item = (&'m String, &'m String)>,
    ) -> BTreeMap<String, String> {
        fields
            .into_iter()
            .map(|(k, v)| (k.clone(), self.text(v)))
            .collect()
    }

    fn faqs(&self, faqs: &[Faq], limit: usize) -> Vec<Faq> {
        faqs.iter()
            .take(limit)
            .map(|f| Faq {
                question: self.text(&f.question),
                answer: self.text(&f.answer),
            })
            .collect()
    }

    fn reviews(&self, reviews: &[Review]) -> Vec<Review> {
        reviews
            .iter()
            .map(|r| Review {
                name: r.name.clone(),
                review: self.text(&r.review),
            })
            .collect()
    }
}

/// Title / description keys, which are not rendered as content blocks.
fn is_meta_key(key: &str) -> bool {
    key == "Title" || key == "Description" || key.ends_with(" Title") || key.ends_with(" Description")
}

/// Builds page view-models. Holds the shared, read-only process state.
#[derive(Debug, Clone)]
pub struct PageResolver {
    index: Arc<LocationIndex>,
    engine: TemplateEngine,
    config: EngineConfig,
}

impl PageResolver {
    pub fn new(index: Arc<LocationIndex>, engine: TemplateEngine, config: EngineConfig) -> Self {
        Self {
            index,
            engine,
            config,
        }
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads the tenant of `request` from `source` and resolves the page.
    ///
    /// Never fails: unresolvable requests yield [`PageViewModel::NotFound`].
    pub fn render(&self, source: &dyn DocumentSource, request: &PageRequest) -> PageViewModel {
        let content = load_tenant(source, &apex_domain(&request.host));
        match self.resolve(request, &content) {
            Ok(view) => view,
            Err(e) => {
                debug!("{}{}: {e}", request.host, request.path);
                self.not_found_page(&content)
            }
        }
    }

    /// Resolves `request` against already loaded tenant content.
    pub fn resolve(&self, request: &PageRequest, content: &TenantContent) -> Result<PageViewModel> {
        let host = normalize_host(&request.host);
        let apex = apex_domain(&host);
        let route = Route::parse(&request.path)
            .ok_or_else(|| PageError::not_found(format!("path {}", request.path)))?;
        let req = Request {
            host: &host,
            path: route.path(),
            links: Links {
                scheme: &self.config.scheme,
                apex: &apex,
            },
            content,
        };

        match (classify(&host), route) {
            (HostKind::Apex, Route::Root) => Ok(self.home_page(&req)),
            (HostKind::State(code), Route::Root) => self.state_page(&req, &code),
            (HostKind::ServiceCityState(triple), route) => {
                let (service, city, state) = triple
                    .parts()
                    .ok_or_else(|| PageError::not_found(format!("host {host}")))?;
                let site = self.site(&req, Some(service), city, state)?;
                self.location_page(&req, &site, route)
            }
            (HostKind::LegacyCityState { city, state }, route) if self.config.legacy_city_hosts => {
                let site = self.site(&req, None, &city, &state)?;
                self.location_page(&req, &site, route)
            }
            (kind, route) => Err(PageError::not_found(format!("{route:?} on {kind:?}"))),
        }
    }

    /// The generic not-found page of a tenant.
    pub fn not_found_page(&self, content: &TenantContent) -> PageViewModel {
        PageViewModel::NotFound(NotFoundPage {
            branding: Branding::from_required(&content.required),
        })
    }

    fn site(
        &self,
        req: &Request<'_>,
        service_label: Option<&str>,
        city: &str,
        state: &str,
    ) -> Result<Site> {
        let location = ResolvedLocation::resolve(&self.index, city, state)
            .ok_or_else(|| PageError::not_found(format!("city {city:?} in state {state:?}")))?;
        let content = req.content;
        let service_name = service_label
            .and_then(|label| content.service_by_host_label(label))
            .map(|s| s.name.clone())
            .or_else(|| content.required.main_service().map(str::to_string))
            .or_else(|| service_label.map(title_case))
            .unwrap_or_default();
        Ok(Site {
            location,
            service_label: service_label.map(str::to_string),
            service_name,
        })
    }

    fn substituter<'a>(&'a self, ctx: TemplateContext<'a>) -> Substituter<'a> {
        Substituter {
            engine: &self.engine,
            ctx,
        }
    }

    fn location_page(&self, req: &Request<'_>, site: &Site, route: Route<'_>) -> Result<PageViewModel> {
        Ok(match route {
            Route::Root => PageViewModel::City(self.city_page(req, site)),
            Route::About => PageViewModel::About(self.about_page(req, site)),
            Route::Contact => PageViewModel::Contact(self.contact_page(req, site)),
            Route::Services => PageViewModel::Services(self.services_page(req, site)),
            Route::Service(slug) => PageViewModel::Service(self.service_page(req, site, slug)?),
        })
    }

    fn home_page(&self, req: &Request<'_>) -> PageViewModel {
        let content = req.content;
        let main = &content.main_content;
        let sub = self.substituter(TemplateContext {
            service_name: content.required.main_service().unwrap_or_default(),
            required: Some(&content.required),
            ..TemplateContext::default()
        });

        let title = main
            .text("Home Page Title")
            .or_else(|| main.text("Title"))
            .unwrap_or(HOME_TITLE);
        let description = main
            .text("Home Page Description")
            .or_else(|| main.text("Description"))
            .unwrap_or(HOME_DESCRIPTION);

        PageViewModel::Home(HomePage {
            title: sub.text(title),
            description: sub.text(description),
            state_links: self
                .index
                .states()
                .map(|s| Link {
                    name: s.name.clone(),
                    link: req.links.state(&s.code),
                })
                .collect(),
            branding: Branding::from_required(&content.required),
        })
    }

    fn state_page(&self, req: &Request<'_>, code: &str) -> Result<PageViewModel> {
        let state = self
            .index
            .state(code)
            .ok_or_else(|| PageError::not_found(format!("state {code:?}")))?;
        let content = req.content;
        let main = &content.main_content;
        let state_abbr = state.code.to_ascii_uppercase();
        let sub = self.substituter(TemplateContext {
            service_name: content.required.main_service().unwrap_or_default(),
            state_abbr: &state_abbr,
            state_full_name: &state.name,
            required: Some(&content.required),
            ..TemplateContext::default()
        });

        let title = main
            .text("State Page Title")
            .or_else(|| main.text("Title"))
            .unwrap_or(STATE_TITLE);
        let description = main
            .text("State Page Description")
            .or_else(|| main.text("Description"))
            .unwrap_or(STATE_DESCRIPTION);

        let label = content.default_service_label();
        let city_links = self
            .index
            .cities(code)
            .iter()
            .map(|city| Link {
                name: title_case(&city.name),
                link: req.links.city(label.as_deref(), &city.name, code),
            })
            .collect();

        Ok(PageViewModel::State(StatePage {
            title: sub.text(title),
            description: sub.text(description),
            state_name: state.name.clone(),
            state_abbr,
            city_links,
            branding: Branding::from_required(&content.required),
        }))
    }

    fn service_summaries(&self, req: &Request<'_>, loc: &ResolvedLocation) -> Vec<ServiceSummary> {
        let required = &req.content.required;
        req.content
            .services
            .iter()
            .map(|s| ServiceSummary {
                name: s.name.clone(),
                url: req.links.service(req.host, &s.slug),
                description: self.engine.substitute(&s.description, &loc.context(&s.name, required)),
            })
            .collect()
    }

    fn city_page(&self, req: &Request<'_>, site: &Site) -> CityPage {
        let content = req.content;
        let main = &content.main_content;
        let loc = &site.location;
        let sub = self.substituter(loc.context(&site.service_name, &content.required));

        let title = main
            .text("Title")
            .or_else(|| content.required.get(META_TITLE))
            .unwrap_or(CITY_TITLE);
        let description = main
            .text("Description")
            .or_else(|| content.required.get(META_DESCRIPTION))
            .unwrap_or(CITY_DESCRIPTION);

        let others = self
            .index
            .other_cities_in_state(&loc.state_abbr, &loc.source_city_name);
        let nearby_cities =
            rotate_nearby(&others, &loc.source_city_name, self.config.nearby_city_limit)
                .into_iter()
                .map(|name| Link {
                    name: name.to_string(),
                    link: req
                        .links
                        .city(site.service_label.as_deref(), name, &loc.state_abbr),
                })
                .collect();

        CityPage {
            title: sub.text(title),
            description: sub.text(description),
            canonical_url: req.links.canonical(req.host, &req.path),
            service_name: site.service_name.clone(),
            location: loc.fields(),
            blocks: sub.map(main.texts.iter().filter(|(k, _)| !is_meta_key(k))),
            cta: main.section("CTA").map(|s| sub.map(s)).unwrap_or_default(),
            services: self.service_summaries(req, loc),
            faqs: sub.faqs(&main.faqs, self.config.faq_limit),
            reviews: sub.reviews(&main.reviews),
            nearby_cities,
            branding: Branding::from_required(&content.required),
        }
    }

    fn service_page(&self, req: &Request<'_>, site: &Site, slug: &str) -> Result<ServicePage> {
        let content = req.content;
        let main = &content.main_content;
        let service = content
            .service_by_slug(slug)
            .ok_or_else(|| PageError::not_found(format!("service {slug:?}")))?;
        let loc = &site.location;
        let sub = self.substituter(loc.context(&service.name, &content.required));

        let title = service
            .meta_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| main.text("Service Page Title"))
            .or_else(|| main.text("Title"))
            .unwrap_or(SERVICE_TITLE);
        let description = service
            .meta_description
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| main.text("Service Page Description"))
            .or_else(|| main.text("Description"))
            .unwrap_or(SERVICE_DESCRIPTION);

        Ok(ServicePage {
            title: sub.text(title),
            description: sub.text(description),
            canonical_url: req.links.canonical(req.host, &req.path),
            name: service.name.clone(),
            body: sub.text(&service.description),
            why_choose_us: sub.text(&service.why_choose_us),
            why_you_need: sub.text(&service.why_you_need),
            image_url: service.image_url.clone(),
            image_alt: service.image_alt.clone(),
            faqs: sub.faqs(&service.faqs, usize::MAX),
            reviews: sub.reviews(&service.reviews),
            location: loc.fields(),
            branding: Branding::from_required(&content.required),
        })
    }

    fn about_page(&self, req: &Request<'_>, site: &Site) -> AboutPage {
        let content = req.content;
        let main = &content.main_content;
        let loc = &site.location;
        let sub = self.substituter(loc.context(&site.service_name, &content.required));

        let title = main
            .text("About Page Title")
            .or_else(|| main.text("Title"))
            .unwrap_or(ABOUT_TITLE);
        let description = main
            .text("About Page Description")
            .or_else(|| main.text("Description"))
            .unwrap_or(ABOUT_DESCRIPTION);

        AboutPage {
            title: sub.text(title),
            description: sub.text(description),
            canonical_url: req.links.canonical(req.host, &req.path),
            blocks: main.section("About").map(|s| sub.map(s)).unwrap_or_default(),
            location: loc.fields(),
            branding: Branding::from_required(&content.required),
        }
    }

    fn contact_page(&self, req: &Request<'_>, site: &Site) -> ContactPage {
        let content = req.content;
        let main = &content.main_content;
        let loc = &site.location;
        let sub = self.substituter(loc.context(&site.service_name, &content.required));

        let title = main
            .text("Contact Page Title")
            .or_else(|| main.text("Title"))
            .unwrap_or(CONTACT_TITLE);
        let description = main
            .text("Contact Page Description")
            .or_else(|| main.text("Description"))
            .unwrap_or(CONTACT_DESCRIPTION);

        ContactPage {
            title: sub.text(title),
            description: sub.text(description),
            canonical_url: req.links.canonical(req.host, &req.path),
            address: sub.text(content.required.address_template()),
            location: loc.fields(),
            branding: Branding::from_required(&content.required),
        }
    }

    fn services_page(&self, req: &Request<'_>, site: &Site) -> ServicesPage {
        let content = req.content;
        let main = &content.main_content;
        let loc = &site.location;
        let sub = self.substituter(loc.context(&site.service_name, &content.required));

        let title = main.text("Services Page Title").unwrap_or(SERVICES_TITLE);
        let description = main
            .text("Services Page Description")
            .unwrap_or(SERVICES_DESCRIPTION);

        ServicesPage {
            title: sub.text(title),
            description: sub.text(description),
            canonical_url: req.links.canonical(req.host, &req.path),
            services: self.service_summaries(req, loc),
            location: loc.fields(),
            branding: Branding::from_required(&content.required),
        }
    }
}
