//! Categorical lookups with a total fallback
//!
//! Each categorical scene field is an enum with a case-insensitive
//! `FromStr`. Resolution never fails: a value the enum does not know falls
//! through to a phrase built from the raw text, so user input is never
//! silently dropped.

use std::str::FromStr;

use crate::domain::text::non_blank_opt;

/// A categorical value that maps to a fixed descriptive phrase
pub trait Phrase: FromStr {
    /// The descriptive phrase for this value
    fn phrase(&self) -> &'static str;
}

/// Resolve an optional raw field into a phrase.
///
/// * absent or blank → `absent`
/// * recognised → the enum's phrase
/// * anything else → `fallback(raw)`
pub fn resolve_phrase<T, F>(raw: Option<&str>, absent: &str, fallback: F) -> String
where
    T: Phrase,
    F: FnOnce(&str) -> String,
{
    match non_blank_opt(raw) {
        None => absent.to_string(),
        Some(value) => match value.parse::<T>() {
            Ok(known) => known.phrase().to_string(),
            Err(_) => fallback(value),
        },
    }
}
