// crates/locpage-core/src/page/nearby.rs
use crate::text::char_code_sum;

/// Rotates `others` to start at `char_code_sum(current_city) % others.len()`
/// and keeps the first `limit` entries.
///
/// Different cities get different "nearby" sets without any randomness,
/// and a given city always gets the same one.
pub fn rotate_nearby<'a>(others: &[&'a str], current_city: &str, limit: usize) -> Vec<&'a str> {
    if others.is_empty() {
        return Vec::new();
    }
    let start = (char_code_sum(current_city) % others.len() as u64) as usize;
    others[start..]
        .iter()
        .chain(&others[..start])
        .take(limit)
        .copied()
        .collect()
}
