// crates/locpage-core/src/template/spintax.rs

//! `{a|b|c}` random-choice groups.
//!
//! Groups are single level: the body runs to the first `}`. Every `|`
//! splits an alternative, and empty alternatives are valid choices.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use std::borrow::Cow;

static SPINTAX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]*)\}").expect("spintax pattern is valid"));

pub fn has_spintax(text: &str) -> bool {
    SPINTAX_RE.is_match(text)
}

/// Replaces every group, left to right, with one alternative drawn from `rng`.
///
/// Text without groups is returned borrowed and untouched.
pub fn resolve<'t, R: Rng>(text: &'t str, rng: &mut R) -> Cow<'t, str> {
    SPINTAX_RE.replace_all(text, |caps: &Captures<'_>| {
        let options: Vec<&str> = caps[1].split('|').collect();
        // u32 draws keep the stream identical on 32- and 64-bit targets.
        let pick = rng.gen_range(0..options.len() as u32) as usize;
        options[pick].to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn plain_text_is_untouched_and_borrowed() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let out = resolve("No groups [City] here", &mut rng);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "No groups [City] here");
    }

    #[test]
    fn each_group_becomes_one_of_its_options() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let out = resolve("{Fast|Quick} and {cheap|affordable}", &mut rng);
        let (first, second) = out.split_once(" and ").unwrap();
        assert!(["Fast", "Quick"].contains(&first));
        assert!(["cheap", "affordable"].contains(&second));
    }

    #[test]
    fn empty_alternatives_are_selectable() {
        assert_eq!(resolve("a{}b", &mut ChaCha8Rng::seed_from_u64(1)), "ab");
        assert_eq!(resolve("a{|}b", &mut ChaCha8Rng::seed_from_u64(1)), "ab");
        let seen: std::collections::HashSet<String> = (0..64)
            .map(|seed| resolve("x{|y}", &mut ChaCha8Rng::seed_from_u64(seed)).into_owned())
            .collect();
        assert!(seen.contains("x"));
        assert!(seen.contains("xy"));
    }

    #[test]
    fn single_option_group_is_unwrapped() {
        assert_eq!(resolve("{only}", &mut ChaCha8Rng::seed_from_u64(3)), "only");
    }

    #[test]
    fn unbalanced_braces_are_left_alone() {
        assert_eq!(resolve("open { only", &mut ChaCha8Rng::seed_from_u64(3)), "open { only");
        assert!(!has_spintax("close } only"));
    }
}
