//! Human-readable explanation of the score inputs.

use crate::scoring::{has_digit, vowel_ratio};
use crate::types::ProbeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub domain_available: usize,
    pub domain_total: usize,
    pub domain_percent: u8,
    pub platform_available: usize,
    pub platform_total: usize,
    pub platform_percent: u8,
    pub readability_rating: String,
    pub length_rating: String,
    pub length_chars: usize,
    pub tips: Vec<String>,
}

/// Counts, percentages and ratings behind the score, plus up to three tips.
///
/// This explains the score; it never recomputes or adjusts it.
pub fn get_score_breakdown(
    domains: &[ProbeResult],
    usernames: &[ProbeResult],
    name: &str,
) -> ScoreBreakdown {
    let domain_available = domains.iter().filter(|r| r.is_available()).count();
    let domain_total = domains.len();
    let platform_available = usernames.iter().filter(|r| r.is_available()).count();
    let platform_total = usernames.len();
    let length_chars = name.chars().count();

    let mut tips = Vec::new();
    if let Some(first) = domains.iter().find(|r| r.is_available()) {
        tips.push(format!(
            "Consider registering {} while it's available",
            first.target.label()
        ));
    }
    if domains
        .iter()
        .any(|r| r.tld() == Some(".com") && r.is_taken())
    {
        tips.push("The .com domain is taken — consider .io or .co alternatives".to_string());
    }
    if (platform_available as f64) < platform_total as f64 * 0.5 {
        tips.push(
            "Many social handles are taken — consider variations like adding 'HQ' or 'App'"
                .to_string(),
        );
    }

    ScoreBreakdown {
        domain_available,
        domain_total,
        domain_percent: percent(domain_available, domain_total),
        platform_available,
        platform_total,
        platform_percent: percent(platform_available, platform_total),
        readability_rating: readability_rating(name).to_string(),
        length_rating: length_rating(length_chars).to_string(),
        length_chars,
        tips,
    }
}

fn percent(part: usize, total: usize) -> u8 {
    ((part as f64 / total.max(1) as f64) * 100.0).round() as u8
}

fn readability_rating(name: &str) -> &'static str {
    let digits = has_digit(name);
    let ratio = vowel_ratio(name);
    if !digits && (0.25..=0.5).contains(&ratio) {
        return "Excellent";
    }
    let symbols = name.chars().any(|c| !c.is_ascii_alphanumeric());
    if digits || symbols || !(0.15..=0.7).contains(&ratio) {
        "Fair"
    } else {
        "Good"
    }
}

fn length_rating(len: usize) -> &'static str {
    match len {
        0..=2 => "Too short",
        3..=4 => "Short",
        5..=12 => "Ideal",
        13..=20 => "Long",
        _ => "Too long",
    }
}
