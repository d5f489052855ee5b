//! URL-safe slugs for place names.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lower-case `text`, collapse every run of characters outside `[a-z0-9]`
/// into a single `-`, and trim hyphens from both ends.
///
/// "St. Louis!!" → "st-louis", "" → "".
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_SLUG
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
