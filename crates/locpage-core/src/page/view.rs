// crates/locpage-core/src/page/view.rs

//! View-models handed to the rendering layer.
//!
//! Every text field is fully substituted; serialized with `serde` the enum
//! becomes a JSON object tagged by `"page"`.

use crate::content::{Faq, RequiredFacts, Review};
use serde::Serialize;
use std::collections::BTreeMap;

/// Site-wide facts every template shows (header, footer, favicon).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Branding {
    pub company_name: Option<String>,
    pub main_service: Option<String>,
    pub favicon: Option<String>,
    pub phone: Option<String>,
}

impl Branding {
    pub fn from_required(required: &RequiredFacts) -> Self {
        Self {
            company_name: required.company_name().map(str::to_string),
            main_service: required.main_service().map(str::to_string),
            favicon: required.favicon().map(str::to_string),
            phone: required.phone().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    pub name: String,
    pub map_link: String,
}

/// Location facts shared by every city-scoped page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationFields {
    pub city_name: String,
    pub state_abbr: String,
    pub state_name: String,
    pub city_zip_code: String,
    pub zip_codes: Vec<String>,
    pub neighborhoods: Vec<Neighborhood>,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub title: String,
    pub description: String,
    pub state_links: Vec<Link>,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatePage {
    pub title: String,
    pub description: String,
    pub state_abbr: String,
    pub state_name: String,
    pub city_links: Vec<Link>,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub name: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityPage {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub service_name: String,
    pub location: LocationFields,
    /// Processed top-level `mainContent` texts, keyed as authored.
    pub blocks: BTreeMap<String, String>,
    pub cta: BTreeMap<String, String>,
    pub services: Vec<ServiceSummary>,
    pub faqs: Vec<Faq>,
    pub reviews: Vec<Review>,
    pub nearby_cities: Vec<Link>,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicePage {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub name: String,
    pub body: String,
    pub why_choose_us: String,
    pub why_you_need: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub faqs: Vec<Faq>,
    pub reviews: Vec<Review>,
    pub location: LocationFields,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub blocks: BTreeMap<String, String>,
    pub location: LocationFields,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPage {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub address: String,
    pub location: LocationFields,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesPage {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub services: Vec<ServiceSummary>,
    pub location: LocationFields,
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub branding: Branding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageViewModel {
    Home(HomePage),
    State(StatePage),
    City(CityPage),
    Service(ServicePage),
    About(AboutPage),
    Contact(ContactPage),
    Services(ServicesPage),
    NotFound(NotFoundPage),
}

impl PageViewModel {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageViewModel::NotFound(_))
    }

    /// The JSON mapping the rendering layer consumes.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            PageViewModel::Home(p) => Some(&p.title),
            PageViewModel::State(p) => Some(&p.title),
            PageViewModel::City(p) => Some(&p.title),
            PageViewModel::Service(p) => Some(&p.title),
            PageViewModel::About(p) => Some(&p.title),
            PageViewModel::Contact(p) => Some(&p.title),
            PageViewModel::Services(p) => Some(&p.title),
            PageViewModel::NotFound(_) => None,
        }
    }
}
