//! Text matching shared by the SQL and in-memory event stores.
//!
//! Free-text search is case-insensitive on both sides: `ILIKE` in
//! `PostgreSQL`, ICU lowercasing in memory. Both compare character by
//! character, so `STRASSE` does not match `Straße` in either store.

use icu::casemap::CaseMapper;
use icu::locale::LanguageIdentifier;

/// ## Summary
/// Lowercases text for case-insensitive comparison.
///
/// Uses ICU root-locale lowercasing, which keeps one-to-one characters the way
/// `ILIKE` compares them. Full case folding would also expand `ß` to `ss`.
#[must_use]
pub fn to_lower(text: &str) -> String {
    CaseMapper::new()
        .lowercase_to_string(text, &LanguageIdentifier::UNKNOWN)
        .into_owned()
}

/// ## Summary
/// Returns true if `needle` occurs in `haystack` ignoring case.
#[must_use]
pub fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    to_lower(haystack).contains(&to_lower(needle))
}

/// ## Summary
/// Escapes special SQL LIKE/ILIKE pattern characters.
///
/// Escapes `%`, `_`, and `\` so they match literally.
#[must_use]
pub fn escape_like_pattern(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Builds a `%value%` LIKE pattern with the value escaped.
#[must_use]
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like_pattern(value))
}
