//! Composite availability score.
//!
//! The formula is a fixed contract shared with existing report consumers:
//! platform availability (40) + weighted domain availability (30) +
//! readability (20) + length (10), rounded once at the end. Do not re-tune
//! the cutoffs or weights; historical scores would silently change.

use crate::protocols::registry::{tld_weight, total_tld_weight};
use crate::types::ProbeResult;

pub const PLATFORM_SHARE: f64 = 40.0;
pub const DOMAIN_SHARE: f64 = 30.0;
pub const READABILITY_SHARE: f64 = 20.0;
pub const LENGTH_SHARE: f64 = 10.0;

/// Score a name from its probe results, 0-100.
///
/// # Arguments
///
/// * `domains` - Domain probe results (any subset of the TLD table)
/// * `usernames` - Username probe results
/// * `name` - The normalized candidate name
pub fn calculate_score(domains: &[ProbeResult], usernames: &[ProbeResult], name: &str) -> u8 {
    let total = platform_component(usernames)
        + domain_component(domains)
        + readability_component(name)
        + length_component(name);
    total.round().clamp(0.0, 100.0) as u8
}

/// Share of available handles, scaled to 40.
pub fn platform_component(usernames: &[ProbeResult]) -> f64 {
    let total = usernames.len().max(1) as f64;
    let available = usernames.iter().filter(|r| r.is_available()).count() as f64;
    (available / total) * PLATFORM_SHARE
}

/// Weight of available TLDs over the weight of the whole table, scaled to 30.
///
/// The denominator is always the full table, so filtering TLDs out of a
/// request lowers the reachable maximum.
pub fn domain_component(domains: &[ProbeResult]) -> f64 {
    let available: f64 = domains
        .iter()
        .filter(|r| r.is_available())
        .filter_map(|r| r.tld())
        .map(tld_weight)
        .sum();
    (available / total_tld_weight()) * DOMAIN_SHARE
}

/// 20, minus 5 each for digits, non-alphanumerics, and a vowel ratio
/// outside [0.15, 0.7].
pub fn readability_component(name: &str) -> f64 {
    let mut readability = READABILITY_SHARE;
    if has_digit(name) {
        readability -= 5.0;
    }
    if name.chars().any(|c| !c.is_ascii_alphanumeric()) {
        readability -= 5.0;
    }
    let ratio = vowel_ratio(name);
    if !(0.15..=0.7).contains(&ratio) {
        readability -= 5.0;
    }
    readability.max(0.0)
}

/// Length bonus; 5-12 characters is the sweet spot.
pub fn length_component(name: &str) -> f64 {
    match name.chars().count() {
        0..=2 => 2.0,
        3..=4 => 6.0,
        5..=12 => LENGTH_SHARE,
        13..=20 => 6.0,
        _ => 2.0,
    }
}

/// Fraction of characters that are `a e i o u` (either case).
///
/// An empty name yields 0.
pub fn vowel_ratio(name: &str) -> f64 {
    let len = name.chars().count();
    if len == 0 {
        return 0.0;
    }
    let vowels = name.chars().filter(|c| is_vowel(*c)).count();
    vowels as f64 / len as f64
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

pub(crate) fn has_digit(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_digit())
}
