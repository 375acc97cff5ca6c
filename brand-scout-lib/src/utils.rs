//! Utility functions for query normalization and validation.
//!
//! A raw query is interpreted exactly once per request; everything downstream
//! works on the resulting [`CandidateName`].

use crate::error::BrandScoutError;
use crate::types::{CandidateName, Interpretation};
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum accepted query length, in characters (one DNS label).
pub const MAX_QUERY_LEN: usize = 63;

lazy_static! {
    static ref DOMAIN_LIKE: Regex =
        Regex::new(r"^[a-z0-9-]+\.[a-z]{2,}$").expect("domain pattern is valid");
}

/// Validate a raw query before any work is done.
///
/// # Errors
///
/// Returns `BrandScoutError::InvalidQuery` if the query is empty or
/// longer than 63 characters.
pub fn validate_query(query: &str) -> Result<(), BrandScoutError> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(BrandScoutError::invalid_query(
            "",
            "Missing required query parameter",
        ));
    }

    if trimmed.chars().count() > MAX_QUERY_LEN {
        return Err(BrandScoutError::invalid_query(
            trimmed,
            format!("Query too long (max {} characters)", MAX_QUERY_LEN),
        ));
    }

    Ok(())
}

/// Interpret a raw query as a bare name or a `label.tld` domain.
///
/// The query is trimmed and lowercased. A domain-like query keeps only its
/// label; anything else is stripped down to `[a-z0-9]`.
///
/// # Arguments
///
/// * `query` - The raw query string
///
/// # Returns
///
/// The candidate name and the interpretation that produced it.
///
/// # Errors
///
/// Returns `BrandScoutError::InvalidQuery` if validation fails or nothing
/// usable is left after normalization.
pub fn parse_query(query: &str) -> Result<CandidateName, BrandScoutError> {
    validate_query(query)?;

    let lowered = query.trim().to_lowercase();

    let (name, interpretation) = if DOMAIN_LIKE.is_match(&lowered) {
        let label = lowered
            .split('.')
            .next()
            .unwrap_or_default()
            .trim_matches('-')
            .to_string();
        (label, Interpretation::Domain)
    } else {
        let name: String = lowered
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        (name, Interpretation::Name)
    };

    // Both probe kinds need at least one letter or digit to work with
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(BrandScoutError::invalid_query(
            query.trim(),
            "Query contains no letters or digits",
        ));
    }

    Ok(CandidateName {
        query: query.trim().to_string(),
        name,
        interpretation,
    })
}

/// Restrict a name to the characters allowed in a domain label.
pub fn domain_label(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Restrict a name to the characters allowed in a platform handle.
pub fn username_handle(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Normalize a TLD to lowercase with exactly one leading dot.
///
/// `"COM"`, `".com"` and `" .com "` all become `".com"`.
pub fn normalize_tld(tld: &str) -> String {
    format!(".{}", tld.trim().trim_start_matches('.').to_lowercase())
}

/// Extract the host part of a URL, used as the politeness key.
///
/// Falls back to the whole string when it does not parse as a URL.
pub fn host_of(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
        .unwrap_or_else(|| url.to_lowercase())
}

/// Split a comma-separated list into trimmed, non-empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
