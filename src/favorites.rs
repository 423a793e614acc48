//! Case-insensitive favorites for suggestion lists
//!
//! Labels are compared by their canonical form (trimmed, lowercased) but are
//! always stored and returned with the casing the user typed.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Comparison form of a label
pub fn canonical(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Whether `list` contains `value`, ignoring case and surrounding whitespace
pub fn has_favorite<S: AsRef<str>>(list: &[S], value: &str) -> bool {
    let key = canonical(value);
    list.iter().any(|item| canonical(item.as_ref()) == key)
}

/// Remove `value` if present (any casing), otherwise append it verbatim
pub fn toggle_favorite_in<S: AsRef<str>>(list: &[S], value: &str) -> Vec<String> {
    let key = canonical(value);
    let remaining: Vec<String> = list
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| canonical(item) != key)
        .map(str::to_string)
        .collect();

    if remaining.len() == list.len() {
        let mut added = remaining;
        added.push(value.to_string());
        added
    } else {
        remaining
    }
}

/// Drop later duplicates, keeping the first occurrence's casing
pub fn dedupe_favorites<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    list.iter()
        .map(|item| item.as_ref())
        .filter(|item| seen.insert(canonical(item)))
        .map(str::to_string)
        .collect()
}

/// Lowercased code point order. Not a locale collation: accented and
/// non-Latin labels sort by code point.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Favorites first, then everything else; each group ordered
/// case-insensitively by code point, not by locale. Items comparing equal
/// keep their input order.
pub fn sort_by_favorite<S: AsRef<str>, F: AsRef<str>>(items: &[S], favorites: &[F]) -> Vec<String> {
    let favorite_keys: HashSet<String> = favorites.iter().map(|f| canonical(f.as_ref())).collect();

    let mut sorted: Vec<(bool, &str)> = items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            (favorite_keys.contains(&canonical(item)), item)
        })
        .collect();

    sorted.sort_by(|(a_fav, a), (b_fav, b)| {
        b_fav
            .cmp(a_fav)
            .then_with(|| compare_ignore_case(a, b))
    });

    sorted.into_iter().map(|(_, item)| item.to_string()).collect()
}
