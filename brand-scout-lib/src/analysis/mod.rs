//! Name-quality analysis.
//!
//! Pure functions over the candidate name and, for the breakdown and market
//! views, over the probe results already gathered for it. Nothing here
//! touches the network or changes the score.

mod breakdown;
mod market;
mod pronunciation;
mod sentiment;
mod spelling;
mod strength;
mod trademark;

pub use breakdown::{get_score_breakdown, ScoreBreakdown};
pub use market::{analyze_market, MarketAnalysis, NicheDemand};
pub use pronunciation::{analyze_pronunciation, count_syllables, Pronunciation, PronunciationRating};
pub use sentiment::{analyze_sentiment, Sentiment, SentimentRating};
pub use spelling::{levenshtein, suggest_correction};
pub use strength::{analyze_name_strength, NameStrength, StrengthBadge};
pub use trademark::{analyze_trademark_risk, TrademarkRisk};

use crate::types::ProbeResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step level used for trademark risk and market opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

/// Every analyzer's output for one name, as carried in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAnalysis {
    pub pronunciation: Pronunciation,
    pub name_strength: NameStrength,
    pub sentiment: Sentiment,
    pub trademark_risk: TrademarkRisk,
    pub score_breakdown: ScoreBreakdown,
    pub market: MarketAnalysis,
}

/// Run every analyzer for `name`.
pub fn analyze_name(name: &str, domains: &[ProbeResult], usernames: &[ProbeResult]) -> NameAnalysis {
    NameAnalysis {
        pronunciation: analyze_pronunciation(name),
        name_strength: analyze_name_strength(name),
        sentiment: analyze_sentiment(name),
        trademark_risk: analyze_trademark_risk(name),
        score_breakdown: get_score_breakdown(domains, usernames, name),
        market: analyze_market(domains, usernames),
    }
}

/// One-sentence summary meant for machine readers.
///
/// ```text
/// Brand "acme": acme.io is available; acme.com, acme.net are taken; usernames available on GitHub.
/// ```
///
/// Segments with nothing to say are left out; `unknown` results are not
/// mentioned at all.
pub fn describe_for_ai(name: &str, domains: &[ProbeResult], usernames: &[ProbeResult]) -> String {
    let available_domains: Vec<String> = domains
        .iter()
        .filter(|r| r.is_available())
        .map(|r| r.target.label())
        .collect();
    let taken_domains: Vec<String> = domains
        .iter()
        .filter(|r| r.is_taken())
        .map(|r| r.target.label())
        .collect();
    let available_platforms: Vec<&str> = usernames
        .iter()
        .filter(|r| r.is_available())
        .filter_map(|r| r.platform())
        .collect();
    let taken_platforms: Vec<&str> = usernames
        .iter()
        .filter(|r| r.is_taken())
        .filter_map(|r| r.platform())
        .collect();

    let verb = |n: usize| if n == 1 { "is" } else { "are" };
    let mut parts = Vec::new();
    if !available_domains.is_empty() {
        parts.push(format!(
            "{} {} available",
            available_domains.join(", "),
            verb(available_domains.len())
        ));
    }
    if !taken_domains.is_empty() {
        parts.push(format!(
            "{} {} taken",
            taken_domains.join(", "),
            verb(taken_domains.len())
        ));
    }
    if !available_platforms.is_empty() {
        parts.push(format!(
            "usernames available on {}",
            available_platforms.join(", ")
        ));
    }
    if !taken_platforms.is_empty() {
        parts.push(format!("usernames taken on {}", taken_platforms.join(", ")));
    }

    format!("Brand \"{}\": {}.", name, parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Availability, ProbeSource, ProbeTarget};

    fn domain(tld: &str, status: Availability) -> ProbeResult {
        ProbeResult::new(ProbeTarget::domain("acme", tld), status, ProbeSource::Rdap, 0.95)
    }

    fn handle(platform: &str, status: Availability) -> ProbeResult {
        ProbeResult::new(
            ProbeTarget::username(platform, "acme"),
            status,
            ProbeSource::Http,
            0.9,
        )
    }

    #[test]
    fn test_describe_for_ai_full_sentence() {
        let domains = vec![
            domain(".com", Availability::Taken),
            domain(".net", Availability::Taken),
            domain(".io", Availability::Available),
            domain(".ai", Availability::Unknown),
        ];
        let usernames = vec![
            handle("GitHub", Availability::Available),
            handle("Reddit", Availability::Taken),
            handle("Instagram", Availability::Unknown),
        ];

        assert_eq!(
            describe_for_ai("acme", &domains, &usernames),
            "Brand \"acme\": acme.io is available; acme.com, acme.net are taken; \
             usernames available on GitHub; usernames taken on Reddit."
        );
    }

    #[test]
    fn test_describe_for_ai_all_unknown() {
        let domains = vec![domain(".com", Availability::Unknown)];
        assert_eq!(describe_for_ai("acme", &domains, &[]), "Brand \"acme\": .");
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = analyze_name("acme", &[domain(".com", Availability::Taken)], &[]);
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("nameStrength").is_some());
        assert!(json.get("trademarkRisk").is_some());
        assert!(json["scoreBreakdown"].get("domainPercent").is_some());
        assert_eq!(json["market"]["marketOpportunity"], "Medium");
        assert_eq!(json["trademarkRisk"]["level"], "Low");
    }
}
