//! Trademark risk heuristic. Not legal advice; every result says so.

use super::Level;
use serde::{Deserialize, Serialize};

pub const TRADEMARK_SEARCH_URL: &str = "https://www.uspto.gov/trademarks/search";

const GENERIC_PREFIXES: [&str; 9] = ["get", "my", "the", "go", "try", "best", "top", "pro", "super"];

const DICTIONARY_WORDS: [&str; 91] = [
    "apple", "amazon", "window", "table", "chair", "water", "fire", "earth", "air", "light",
    "dark", "black", "white", "blue", "green", "red", "orange", "book", "door", "house", "room",
    "food", "fish", "bird", "tree", "flower", "music", "video", "game", "play", "cloud", "rain",
    "snow", "sun", "moon", "star", "rock", "stone", "iron", "steel", "glass", "wood", "paper",
    "gold", "silver", "diamond", "pearl", "ocean", "river", "lake", "mountain", "forest",
    "garden", "field", "bridge", "tower", "castle", "crown", "king", "queen", "knight", "angel",
    "dragon", "wolf", "fox", "bear", "eagle", "hawk", "lion", "tiger", "spark", "flash", "bolt",
    "wave", "pulse", "core", "edge", "peak", "summit", "base", "root", "seed", "bloom", "harvest",
    "orbit", "nexus", "prism", "atlas", "titan", "nova", "zenith",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkRisk {
    pub level: Level,
    pub warnings: Vec<String>,
    pub search_url: String,
}

/// Escalate a Low/Medium/High risk level from dictionary-commonness, very
/// short length, and generic prefixes.
///
/// A dictionary word is High; the other two raise Low to Medium. The last
/// warning always recommends professional verification.
pub fn analyze_trademark_risk(name: &str) -> TrademarkRisk {
    let lower: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    let mut warnings = Vec::new();
    let mut level = Level::Low;

    if DICTIONARY_WORDS.contains(&lower.as_str()) {
        warnings.push("Common English word — higher trademark risk and harder to protect");
        level = Level::High;
    }

    if lower.len() <= 2 {
        warnings.push("Very short names are difficult to trademark");
        level = level.max(Level::Medium);
    }

    if GENERIC_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        warnings.push("Generic prefix may weaken trademark strength");
        level = level.max(Level::Medium);
    }

    if warnings.is_empty() {
        warnings.push("No obvious trademark concerns detected");
    }
    warnings.push("Always verify with a trademark attorney before registering");

    TrademarkRisk {
        level,
        warnings: warnings.into_iter().map(String::from).collect(),
        search_url: TRADEMARK_SEARCH_URL.to_string(),
    }
}
