// crates/locpage-core/src/text.rs

//! Small string helpers shared by the index, the host parser and the
//! page resolver.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `San José` -> `San Jose`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use locpage_core::text::fold_key;
///
/// assert_eq!(fold_key("San José"), "san jose");
/// assert_eq!(fold_key("AUSTIN"), "austin");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Title-cases every whitespace separated word (`"san antonio"` -> `"San Antonio"`).
///
/// Characters after the first in each word are lower-cased, so
/// `"NEW YORK"` also becomes `"New York"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Turns a name into its dashed host or path form.
///
/// Every run of non-alphanumeric characters becomes one dash, so
/// `"San Antonio"` and `"san-antonio"` both give `"san-antonio"` and
/// `"O'Fallon"` gives `"o-fallon"`.
pub fn dashed_slug(name: &str) -> String {
    fold_key(name)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Compact slug for the service label of a host.
///
/// The service is the first dash separated segment, so the slug may not
/// contain dashes itself: `"Water Damage"` -> `"waterdamage"`.
pub fn host_slug(s: &str) -> String {
    fold_key(s)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Joins whitespace separated words with `+` (map URL style).
pub fn plus_join(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("+")
}

/// Sum of the character codes of `s`, used for deterministic rotations.
pub fn char_code_sum(s: &str) -> u64 {
    s.chars().map(|c| u64::from(u32::from(c))).sum()
}
