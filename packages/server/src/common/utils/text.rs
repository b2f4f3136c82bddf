//! Case-insensitive string matching.
//!
//! These mirror the `LOWER(..)` comparisons the Postgres store pushes down, so the
//! in-memory store and the SQL store agree on which records match.

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive substring test against an optional field. `None` never matches.
pub fn contains_ci_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle))
}

/// Case-insensitive equality.
///
/// Service categories are free text, so this is how a service is tied to a catalog
/// entry. There is no foreign key behind it.
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
