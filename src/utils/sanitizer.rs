//! URL canonicalization
//!
//! http, https and `www.` variants of the same host and path share one
//! canonical form. The whole string is lower-cased, path included, so
//! `/DatabaseCleaner/` and `/databasecleaner/` deduplicate to the same link.

/// Scheme prepended to every canonical form
pub const CANONICAL_SCHEME: &str = "http://";

/// Output of [`sanitize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedUrl {
    /// Input with surrounding whitespace removed; stored as `original_url`
    pub original: String,
    /// Comparison key used for dedup; stored as `sanitized_url`
    pub canonical: String,
}

pub fn sanitize(raw: &str) -> SanitizedUrl {
    let original = raw.trim().to_string();

    let lowered = original.to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    let without_slash = without_www.strip_suffix('/').unwrap_or(without_www);

    let canonical = format!("{}{}", CANONICAL_SCHEME, without_slash);

    SanitizedUrl {
        original,
        canonical,
    }
}
