// crates/locpage-core/src/content/normalize.rs

//! Turns whatever shape a tenant document arrives in into the canonical
//! [`TenantContent`](super::TenantContent) types.
//!
//! Tolerated drift:
//! - the services document may be a bare list or an object holding the list
//!   under `Services` / `services`;
//! - FAQ and review lists may be keyed `FAQs` / `faqs` and `Reviews` /
//!   `reviews` (capitalized spelling wins);
//! - item fields may be capitalized or not.

use super::{Faq, MainContent, RequiredFacts, Review, ServiceRecord};
use crate::text::dashed_slug;
use log::warn;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub(crate) const SERVICES_KEYS: (&str, &str) = ("Services", "services");
pub(crate) const FAQ_KEYS: (&str, &str) = ("FAQs", "faqs");
pub(crate) const REVIEW_KEYS: (&str, &str) = ("Reviews", "reviews");

/// Scalar JSON as text; objects, arrays and null are not text.
pub(crate) fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First key of `keys` holding a scalar.
fn field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(scalar_text))
}

fn field_or_empty(obj: &Map<String, Value>, keys: &[&str]) -> String {
    field(obj, keys).unwrap_or_default()
}

/// Reads a list under the capitalized key, then the lower-case one.
pub(crate) fn list_field<'a>(obj: &'a Map<String, Value>, (upper, lower): (&str, &str)) -> &'a [Value] {
    obj.get(upper)
        .and_then(Value::as_array)
        .or_else(|| obj.get(lower).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn as_object(doc: Value, what: &str) -> Map<String, Value> {
    match doc {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            warn!("{what} document is not an object ({}), ignoring it", type_name(&other));
            Map::new()
        }
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalars(obj: &Map<String, Value>) -> BTreeMap<String, String> {
    obj.iter()
        .filter_map(|(k, v)| scalar_text(v).map(|t| (k.clone(), t)))
        .collect()
}

pub(crate) fn faqs(obj: &Map<String, Value>) -> Vec<Faq> {
    list_field(obj, FAQ_KEYS)
        .iter()
        .filter_map(Value::as_object)
        .map(|item| Faq {
            question: field_or_empty(item, &["Question", "question"]),
            answer: field_or_empty(item, &["Answer", "answer"]),
        })
        .collect()
}

pub(crate) fn reviews(obj: &Map<String, Value>) -> Vec<Review> {
    list_field(obj, REVIEW_KEYS)
        .iter()
        .filter_map(Value::as_object)
        .map(|item| Review {
            name: field_or_empty(item, &["Name", "name"]),
            review: field_or_empty(item, &["Review", "review"]),
        })
        .collect()
}

pub(crate) fn required(doc: Value) -> RequiredFacts {
    RequiredFacts(scalars(&as_object(doc, "required")))
}

pub(crate) fn main_content(doc: Value) -> MainContent {
    let obj = as_object(doc, "mainContent");
    let sections = obj
        .iter()
        .filter_map(|(k, v)| v.as_object().map(|section| (k.clone(), scalars(section))))
        .collect();
    MainContent {
        texts: scalars(&obj),
        sections,
        faqs: faqs(&obj),
        reviews: reviews(&obj),
    }
}

/// A bare list becomes `{"Services": list}`; objects pass through.
pub(crate) fn wrap_services(doc: Value) -> Map<String, Value> {
    match doc {
        Value::Array(list) => {
            let mut map = Map::new();
            map.insert(SERVICES_KEYS.0.to_string(), Value::Array(list));
            map
        }
        other => as_object(other, "services"),
    }
}

pub(crate) fn services(doc: Value) -> Vec<ServiceRecord> {
    let wrapped = wrap_services(doc);
    list_field(&wrapped, SERVICES_KEYS)
        .iter()
        .filter_map(Value::as_object)
        .filter_map(service)
        .collect()
}

fn service(obj: &Map<String, Value>) -> Option<ServiceRecord> {
    let name = field(obj, &["Name", "name"]).filter(|n| !n.trim().is_empty())?;
    let slug = field(obj, &["Slug", "slug", "URL", "url"])
        .map(|s| s.trim_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| dashed_slug(&name));
    Some(ServiceRecord {
        slug,
        description: field_or_empty(obj, &["Description", "description"]),
        why_choose_us: field_or_empty(obj, &["Why Choose Us", "why_choose_us"]),
        why_you_need: field_or_empty(obj, &["Why You Need", "why_you_need"]),
        image_url: field(obj, &["Image URL", "image_url"]),
        image_alt: field(obj, &["Image Alt", "image_alt"]),
        meta_title: field(obj, &["Meta Title", "meta_title"]),
        meta_description: field(obj, &["Meta Description", "meta_description"]),
        faqs: faqs(obj),
        reviews: reviews(obj),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_service_list_is_wrapped() {
        let wrapped = wrap_services(json!([{"name": "Plumbing"}]));
        assert!(wrapped.contains_key("Services"));
        let list = services(json!([{"name": "Plumbing", "url": "/plumbing/"}]));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].slug, "plumbing");
    }

    #[test]
    fn service_object_uses_either_key_casing() {
        let upper = services(json!({"Services": [{"name": "A"}]}));
        let lower = services(json!({"services": [{"name": "B"}, {"name": "C"}]}));
        assert_eq!(upper[0].name, "A");
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn capitalized_list_key_wins() {
        let obj = json!({
            "FAQs": [{"question": "Upper?", "answer": "yes"}],
            "faqs": [{"question": "Lower?", "answer": "no"}],
            "reviews": [{"name": "Ann", "review": "Great"}]
        });
        let obj = obj.as_object().unwrap();
        let f = faqs(obj);
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].question, "Upper?");
        assert_eq!(reviews(obj)[0].name, "Ann");
    }

    #[test]
    fn missing_lists_are_empty() {
        let obj = Map::new();
        assert!(faqs(&obj).is_empty());
        assert!(reviews(&obj).is_empty());
    }

    #[test]
    fn services_without_name_are_skipped_and_slug_defaults() {
        let list = services(json!([{"url": "x"}, {"name": "Water Damage"}, 5]));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].slug, "water-damage");
    }

    #[test]
    fn non_object_documents_degrade_to_empty() {
        assert!(required(json!("oops")).0.is_empty());
        assert!(services(json!(42)).is_empty());
        let main = main_content(json!({
            "Title": "Hi",
            "Year": 2024,
            "CTA": {"Heading": "Call"},
            "faqs": []
        }));
        assert_eq!(main.texts["Year"], "2024");
        assert_eq!(main.sections["CTA"]["Heading"], "Call");
    }
}
