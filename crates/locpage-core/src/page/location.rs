// crates/locpage-core/src/page/location.rs
use super::links::{map_embed, neighborhood_map};
use super::view::{LocationFields, Neighborhood};
use crate::content::RequiredFacts;
use crate::model::LocationIndex;
use crate::template::TemplateContext;
use crate::text::title_case;

/// City/state facts derived from a parsed host. Built per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// City name as stored in the index (drives the nearby rotation).
    pub source_city_name: String,
    /// Title-cased display name.
    pub city_name: String,
    /// Upper-cased state code.
    pub state_abbr: String,
    pub state_full_name: String,
    pub city_zip: String,
    pub zip_codes: Vec<String>,
    pub neighborhoods: Vec<String>,
}

impl ResolvedLocation {
    /// Looks up `city_segment` (dashed, as in the host) inside `state`.
    ///
    /// `None` when the state is unknown or has no such city.
    pub fn resolve(index: &LocationIndex, city_segment: &str, state: &str) -> Option<Self> {
        let state_full_name = index.state_name(state)?.to_string();
        let city = index.city(state, city_segment)?;
        let city_name = title_case(&city.name);
        Some(Self {
            zip_codes: index.zip_codes_for_city(&city_name).to_vec(),
            neighborhoods: index.neighborhoods(&city_name).to_vec(),
            source_city_name: city.name.clone(),
            city_zip: city.zip.clone().unwrap_or_default(),
            state_abbr: state.to_ascii_uppercase(),
            state_full_name,
            city_name,
        })
    }

    pub fn context<'a>(
        &'a self,
        service_name: &'a str,
        required: &'a RequiredFacts,
    ) -> TemplateContext<'a> {
        TemplateContext {
            service_name,
            city_name: &self.city_name,
            state_abbr: &self.state_abbr,
            state_full_name: &self.state_full_name,
            required: Some(required),
            zip_codes: &self.zip_codes,
            city_zip: &self.city_zip,
            neighborhoods: &self.neighborhoods,
        }
    }

    pub fn fields(&self) -> LocationFields {
        LocationFields {
            city_name: self.city_name.clone(),
            state_abbr: self.state_abbr.clone(),
            state_name: self.state_full_name.clone(),
            city_zip_code: self.city_zip.clone(),
            zip_codes: self.zip_codes.clone(),
            neighborhoods: self
                .neighborhoods
                .iter()
                .map(|name| Neighborhood {
                    name: name.clone(),
                    map_link: neighborhood_map(name, &self.city_name, &self.state_full_name),
                })
                .collect(),
            map_embed_url: map_embed(&self.city_name, &self.state_full_name),
        }
    }
}
