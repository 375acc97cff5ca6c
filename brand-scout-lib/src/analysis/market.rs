//! Niche demand indicator.

use super::Level;
use crate::types::ProbeResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NicheDemand {
    #[serde(rename = "High Demand Niche")]
    High,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Low Competition — Great Opportunity!")]
    Low,
}

impl fmt::Display for NicheDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NicheDemand::High => write!(f, "High Demand Niche"),
            NicheDemand::Moderate => write!(f, "Moderate"),
            NicheDemand::Low => write!(f, "Low Competition — Great Opportunity!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub niche_demand: NicheDemand,
    pub market_opportunity: Level,
    pub explanation: String,
    /// Share of taken slots, 0-100
    pub demand_score: u8,
}

/// Read demand from how much of the name space is already taken.
///
/// The taken ratio of domains and of handles are averaged, each over at
/// least one slot. 70% and above is a crowded niche, 40% and above moderate.
pub fn analyze_market(domains: &[ProbeResult], usernames: &[ProbeResult]) -> MarketAnalysis {
    let taken_ratio = |results: &[ProbeResult]| {
        let taken = results.iter().filter(|r| r.is_taken()).count();
        taken as f64 / results.len().max(1) as f64
    };
    let overall = (taken_ratio(domains) + taken_ratio(usernames)) / 2.0;
    let demand_score = (overall * 100.0).round() as u8;

    let (niche_demand, market_opportunity, explanation) = if overall >= 0.7 {
        (
            NicheDemand::High,
            Level::Low,
            format!(
                "{}% of domains and handles are taken. This niche is highly competitive — act fast on any available slots.",
                demand_score
            ),
        )
    } else if overall >= 0.4 {
        (
            NicheDemand::Moderate,
            Level::Medium,
            format!(
                "{}% taken. Moderate competition with decent availability remaining.",
                demand_score
            ),
        )
    } else {
        (
            NicheDemand::Low,
            Level::High,
            format!(
                "Only {}% taken. Wide open market with great branding opportunity.",
                demand_score
            ),
        )
    };

    MarketAnalysis {
        niche_demand,
        market_opportunity,
        explanation,
        demand_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Availability, ProbeSource, ProbeTarget};

    fn results(taken: usize, total: usize) -> Vec<ProbeResult> {
        (0..total)
            .map(|i| {
                let status = if i < taken {
                    Availability::Taken
                } else {
                    Availability::Available
                };
                ProbeResult::new(
                    ProbeTarget::username(format!("p{}", i), "acme"),
                    status,
                    ProbeSource::Http,
                    0.9,
                )
            })
            .collect()
    }

    #[test]
    fn test_crowded_niche() {
        let m = analyze_market(&results(7, 7), &results(9, 12));
        // (1.0 + 0.75) / 2
        assert_eq!(m.demand_score, 88);
        assert_eq!(m.niche_demand, NicheDemand::High);
        assert_eq!(m.market_opportunity, Level::Low);
        assert!(m.explanation.starts_with("88% of domains"));
    }

    #[test]
    fn test_moderate() {
        let m = analyze_market(&results(2, 4), &results(1, 2));
        assert_eq!(m.demand_score, 50);
        assert_eq!(m.market_opportunity, Level::Medium);
    }

    #[test]
    fn test_open_market_and_empty_inputs() {
        let m = analyze_market(&[], &[]);
        assert_eq!(m.demand_score, 0);
        assert_eq!(m.niche_demand, NicheDemand::Low);
        assert_eq!(
            m.explanation,
            "Only 0% taken. Wide open market with great branding opportunity."
        );
    }

    #[test]
    fn test_serialized_labels() {
        let m = analyze_market(&[], &[]);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["nicheDemand"], "Low Competition — Great Opportunity!");
        assert_eq!(json["marketOpportunity"], "High");
        assert_eq!(json["demandScore"], 0);
    }
}
