// crates/locpage-core/src/template/mod.rs

//! # Templating Engine
//!
//! Two phases, always in this order:
//! 1. **Spintax**: every `{a|b}` group is replaced by one alternative drawn
//!    from a generator seeded by the location (see [`seed`]). Each call
//!    starts a fresh generator from the cached seed, so the n-th group of a
//!    given text resolves the same way on every render for that location.
//! 2. **Fixed tokens**: `[City]`, `[State]`, ... (see [`tokens::TOKENS`]).

pub mod seed;
pub mod spintax;
pub mod tokens;

pub use seed::{location_seed, SeedCache};
pub use tokens::{MISSING_FACT, TOKENS};

use crate::content::RequiredFacts;
use std::sync::Arc;

/// Everything placeholders may refer to. Absent facts render as defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateContext<'a> {
    pub service_name: &'a str,
    pub city_name: &'a str,
    pub state_abbr: &'a str,
    pub state_full_name: &'a str,
    pub required: Option<&'a RequiredFacts>,
    pub zip_codes: &'a [String],
    pub city_zip: &'a str,
    pub neighborhoods: &'a [String],
}

/// Deterministic spintax + token substitution.
///
/// Cheap to clone; clones share the seed cache.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    seeds: Arc<SeedCache>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed_cache(seeds: Arc<SeedCache>) -> Self {
        Self { seeds }
    }

    pub fn seed_cache(&self) -> &SeedCache {
        &self.seeds
    }

    /// Phase 1 only: resolves spintax groups for the context's location.
    pub fn resolve_spintax(&self, text: &str, city: &str, state: &str) -> String {
        if !spintax::has_spintax(text) {
            return text.to_string();
        }
        let mut rng = seed::rng_from_seed(self.seeds.seed_for(city, state));
        spintax::resolve(text, &mut rng).into_owned()
    }

    /// Runs both phases over `text`.
    pub fn substitute(&self, text: &str, ctx: &TemplateContext<'_>) -> String {
        let spun = self.resolve_spintax(text, ctx.city_name, ctx.state_abbr);
        tokens::substitute(&spun, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(city: &'a str, state: &'a str) -> TemplateContext<'a> {
        TemplateContext {
            service_name: "Plumbing",
            city_name: city,
            state_abbr: state,
            state_full_name: "Texas",
            ..TemplateContext::default()
        }
    }

    const TEXT: &str = "{Fast|Quick|Rapid|Speedy} [service] in [City]: {call|ring|phone|dial} \
                        {today|now|anytime|24/7}. {A|B|C|D|E|F|G|H}";

    #[test]
    fn output_is_deterministic_per_location() {
        let engine = TemplateEngine::new();
        let first = engine.substitute(TEXT, &ctx("Austin", "TX"));
        for _ in 0..10 {
            assert_eq!(engine.substitute(TEXT, &ctx("Austin", "TX")), first);
        }
        assert!(first.contains("plumbing in Austin"));
        assert!(!first.contains('{'));
    }

    #[test]
    fn output_survives_a_fresh_cache() {
        let a = TemplateEngine::new().substitute(TEXT, &ctx("Austin", "TX"));
        let b = TemplateEngine::new().substitute(TEXT, &ctx("Austin", "TX"));
        assert_eq!(a, b);
    }

    #[test]
    fn austin_choices_are_pinned() {
        let engine = TemplateEngine::new();
        assert_eq!(
            engine.resolve_spintax("{a|b|c|d} {a|b|c|d} {a|b|c|d}", "Austin", "TX"),
            "a b a"
        );
    }

    #[test]
    fn different_fields_draw_from_independent_streams() {
        let engine = TemplateEngine::new();
        let c = ctx("Austin", "TX");
        // A field with one group starts a fresh stream, so it matches the
        // first group of a longer field rather than continuing from it.
        let single = engine.substitute("{Fast|Quick}", &c);
        let double = engine.substitute("{Fast|Quick} {Fast|Quick}", &c);
        assert!(double.starts_with(&single));
        assert_eq!(engine.substitute("{Fast|Quick}", &c), single);
        assert_eq!(engine.seed_cache().len(), 1);
    }

    #[test]
    fn locations_do_not_share_one_choice_sequence() {
        let engine = TemplateEngine::new();
        let cities = ["Austin", "Dallas", "Houston", "Plano", "Waco", "Tyler", "Frisco", "Katy"];
        let outputs: std::collections::HashSet<String> = cities
            .iter()
            .map(|city| engine.resolve_spintax(TEXT, city, "TX"))
            .collect();
        assert!(outputs.len() > 1);
        assert_eq!(engine.seed_cache().len(), cities.len());
    }

    #[test]
    fn plain_text_skips_phase_one() {
        let engine = TemplateEngine::new();
        assert_eq!(engine.resolve_spintax("no groups", "Austin", "TX"), "no groups");
        assert!(engine.seed_cache().is_empty());
    }

    #[test]
    fn spintax_runs_before_tokens() {
        let engine = TemplateEngine::new();
        let out = engine.substitute("{[City]|[City]}", &ctx("Austin", "TX"));
        assert_eq!(out, "Austin");
    }
}
