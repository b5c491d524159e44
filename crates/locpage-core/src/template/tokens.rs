// crates/locpage-core/src/template/tokens.rs

//! Fixed `[Token]` placeholders.
//!
//! The vocabulary is case-sensitive and shared with tenant authors, so the
//! spellings below must not change.

use super::TemplateContext;
use crate::content::{COMPANY_NAME, PHONE_PLACEHOLDER};
use std::borrow::Cow;

/// Value used for facts absent from the `required` document.
pub const MISSING_FACT: &str = "N/A";

/// Every token, in evaluation order.
pub const TOKENS: [&str; 17] = [
    "[Service]",
    "[service]",
    "[City-State]",
    "[city-state]",
    "[City]",
    "[city]",
    "[CITY]",
    "[State]",
    "[state]",
    "[STATE]",
    "[State Full]",
    "[Phone No.]",
    "[Company Name]",
    "[City Zip Code]",
    "[Zip Codes]",
    "[Neighborhoods]",
    "[zipcode]",
];

fn value_of<'c>(token: &str, ctx: &TemplateContext<'c>) -> Option<Cow<'c, str>> {
    let fact = |key: &str| -> Cow<'c, str> {
        Cow::Borrowed(ctx.required.and_then(|r| r.raw(key)).unwrap_or(MISSING_FACT))
    };
    let v = match token {
        "[Service]" => Cow::Borrowed(ctx.service_name),
        "[service]" => Cow::Owned(ctx.service_name.to_lowercase()),
        "[City-State]" => Cow::Owned(format!("{}, {}", ctx.city_name, ctx.state_abbr)),
        "[city-state]" => Cow::Owned(format!(
            "{}, {}",
            ctx.city_name.to_lowercase(),
            ctx.state_abbr.to_lowercase()
        )),
        "[City]" => Cow::Borrowed(ctx.city_name),
        "[city]" => Cow::Owned(ctx.city_name.to_lowercase()),
        "[CITY]" => Cow::Owned(ctx.city_name.to_uppercase()),
        "[State]" => Cow::Borrowed(ctx.state_abbr),
        "[state]" => Cow::Owned(ctx.state_abbr.to_lowercase()),
        "[STATE]" => Cow::Owned(ctx.state_abbr.to_uppercase()),
        "[State Full]" => Cow::Borrowed(ctx.state_full_name),
        "[Phone No.]" => fact(PHONE_PLACEHOLDER),
        "[Company Name]" => fact(COMPANY_NAME),
        "[City Zip Code]" | "[zipcode]" => Cow::Borrowed(ctx.city_zip),
        "[Zip Codes]" => Cow::Owned(ctx.zip_codes.join(", ")),
        "[Neighborhoods]" => Cow::Owned(ctx.neighborhoods.join(", ")),
        _ => return None,
    };
    Some(v)
}

/// Replaces every known token in one left-to-right pass.
///
/// Replacement text is never scanned again, so a company name containing
/// `[City]` stays literal. Unknown bracketed text is kept as written.
pub fn substitute(text: &str, ctx: &TemplateContext<'_>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        if let Some(close) = candidate.find(']') {
            if let Some(value) = value_of(&candidate[..=close], ctx) {
                out.push_str(&value);
                rest = &candidate[close + 1..];
                continue;
            }
        }
        out.push('[');
        rest = &candidate[1..];
    }
    out.push_str(rest);
    out
}
