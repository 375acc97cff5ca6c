//! Word-association check.

use serde::{Deserialize, Serialize};
use std::fmt;

const POSITIVE_WORDS: [&str; 32] = [
    "bright", "star", "nova", "zen", "bloom", "rise", "swift", "gold", "prime", "elite", "apex",
    "peak", "shine", "glow", "spark", "joy", "win", "ace", "hero", "dream", "hope", "trust", "pure",
    "clear", "bold", "power", "vital", "thrive", "bliss", "grace", "smart", "noble",
];

const NEGATIVE_WORDS: [&str; 32] = [
    "die", "dead", "kill", "hate", "war", "hell", "damn", "evil", "pain", "fail", "loss", "sick",
    "ugly", "dumb", "crud", "crap", "rot", "doom", "dread", "grief", "harm", "toxic", "waste",
    "weak", "broke", "crash", "drain", "fraud", "scam", "spam", "virus", "bug",
];

/// Fragments that read as profanity even inside another word.
const EXPLICIT_SOUNDS: [&str; 8] = ["ass", "shit", "fuk", "fuc", "dic", "piss", "slut", "bich"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentRating {
    #[serde(rename = "Positive associations")]
    Positive,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Potential negative associations")]
    Negative,
}

impl fmt::Display for SentimentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentRating::Positive => write!(f, "Positive associations"),
            SentimentRating::Neutral => write!(f, "Neutral"),
            SentimentRating::Negative => write!(f, "Potential negative associations"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub rating: SentimentRating,
    pub details: Vec<String>,
}

/// Substring match against the word lists; the first hit wins, checking
/// explicit sounds, then negative words, then positive words.
pub fn analyze_sentiment(name: &str) -> Sentiment {
    let lower: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if let Some(sound) = EXPLICIT_SOUNDS.iter().find(|s| lower.contains(*s)) {
        return Sentiment {
            rating: SentimentRating::Negative,
            details: vec![format!("Contains \"{}\" sound", sound)],
        };
    }

    if let Some(word) = NEGATIVE_WORDS.iter().find(|w| lower.contains(*w)) {
        return Sentiment {
            rating: SentimentRating::Negative,
            details: vec![format!("Contains \"{}\"", word)],
        };
    }

    if let Some(word) = POSITIVE_WORDS.iter().find(|w| lower.contains(*w)) {
        return Sentiment {
            rating: SentimentRating::Positive,
            details: vec![format!("Contains \"{}\" — positive connotation", word)],
        };
    }

    Sentiment {
        rating: SentimentRating::Neutral,
        details: vec!["No strong positive or negative associations detected".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        let s = analyze_sentiment("BrightPath");
        assert_eq!(s.rating, SentimentRating::Positive);
        assert_eq!(s.details, vec!["Contains \"bright\" — positive connotation"]);
    }

    #[test]
    fn test_negative_beats_positive() {
        // "starwars": "war" is checked before "star"
        let s = analyze_sentiment("starwars");
        assert_eq!(s.rating, SentimentRating::Negative);
        assert_eq!(s.details, vec!["Contains \"war\""]);
    }

    #[test]
    fn test_explicit_sound_first() {
        let s = analyze_sentiment("classbug");
        assert_eq!(s.rating, SentimentRating::Negative);
        assert_eq!(s.details, vec!["Contains \"ass\" sound"]);
    }

    #[test]
    fn test_neutral() {
        let s = analyze_sentiment("acme");
        assert_eq!(s.rating, SentimentRating::Neutral);
        assert_eq!(s.rating.to_string(), "Neutral");
    }
}
