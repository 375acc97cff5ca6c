//! Name strength rubric.

use super::pronunciation::{analyze_pronunciation, PronunciationRating};
use crate::scoring::has_digit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everyday words too common to work as a distinctive brand.
const COMMON_WORDS: [&str; 59] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old", "see",
    "way", "who", "did", "let", "say", "she", "too", "use", "best", "good", "make", "like", "just",
    "know", "take", "come", "more", "find", "here", "thing", "many", "some", "time", "very",
    "when", "what", "your", "work", "first", "also", "after", "well", "only",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthBadge {
    #[serde(rename = "Strong Name")]
    Strong,
    #[serde(rename = "Good Name")]
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl fmt::Display for StrengthBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthBadge::Strong => write!(f, "Strong Name"),
            StrengthBadge::Good => write!(f, "Good Name"),
            StrengthBadge::NeedsWork => write!(f, "Needs Work"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameStrength {
    pub badge: StrengthBadge,
    /// 0-100
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Grade `name` on length fit (25), pronounceability (25), memorability
/// (20), spelling simplicity (15) and distinctiveness (15).
///
/// 75 and above is a strong name, 50 and above a good one.
pub fn analyze_name_strength(name: &str) -> NameStrength {
    let clean: String = name.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let len = clean.len();
    let mut score = 0u8;
    let mut reasons: Vec<&str> = Vec::new();

    if (5..=10).contains(&len) {
        score += 25;
        reasons.push("Ideal length");
    } else if (3..=14).contains(&len) {
        score += 15;
        reasons.push("Acceptable length");
    } else {
        score += 5;
        reasons.push(if len < 3 { "Too short" } else { "Too long" });
    }

    match analyze_pronunciation(name).rating {
        PronunciationRating::Easy => {
            score += 25;
            reasons.push("Easy to say");
        }
        PronunciationRating::Moderate => {
            score += 15;
            reasons.push("Moderately easy to say");
        }
        PronunciationRating::Tricky => {
            score += 5;
            reasons.push("Hard to pronounce");
        }
    }

    let digits = has_digit(&clean);
    if !digits && len <= 12 {
        score += 20;
        reasons.push("Memorable");
    } else if digits {
        score += 5;
        reasons.push("Numbers reduce memorability");
    } else {
        score += 10;
        reasons.push("Moderately memorable");
    }

    let repeats = has_triple_repeat(&clean);
    let uncommon = clean
        .chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'x' | 'z' | 'q' | 'j'));
    if !repeats && !uncommon {
        score += 15;
        reasons.push("Easy to spell");
    } else if repeats {
        score += 5;
        reasons.push("Repeated letters may confuse");
    } else {
        score += 10;
        reasons.push("Contains uncommon letters");
    }

    if COMMON_WORDS.contains(&clean.to_lowercase().as_str()) {
        score += 3;
        reasons.push("Common word — less distinctive");
    } else {
        score += 15;
        reasons.push("Unique/distinctive");
    }

    let badge = match score {
        75.. => StrengthBadge::Strong,
        50..=74 => StrengthBadge::Good,
        _ => StrengthBadge::NeedsWork,
    };

    NameStrength {
        badge,
        score,
        reasons: reasons.into_iter().map(String::from).collect(),
    }
}

/// Same character three or more times in a row.
fn has_triple_repeat(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_name() {
        let s = analyze_name_strength("acmely");
        // 25 + 25 + 20 + 15 + 15
        assert_eq!(s.score, 100);
        assert_eq!(s.badge, StrengthBadge::Strong);
        assert_eq!(
            s.reasons,
            vec![
                "Ideal length",
                "Easy to say",
                "Memorable",
                "Easy to spell",
                "Unique/distinctive"
            ]
        );
    }

    #[test]
    fn test_common_word_and_short() {
        let s = analyze_name_strength("the");
        // acceptable length 15, easy 25, memorable 20, easy spell 15, common 3
        assert_eq!(s.score, 78);
        assert!(s.reasons.contains(&"Common word — less distinctive".to_string()));
    }

    #[test]
    fn test_digits_and_uncommon_letters() {
        let s = analyze_name_strength("zx9");
        // 15 + 15 (moderate) + 5 + 10 + 15
        assert_eq!(s.score, 60);
        assert_eq!(s.badge, StrengthBadge::Good);
        assert!(s.reasons.contains(&"Numbers reduce memorability".to_string()));
        assert!(s.reasons.contains(&"Contains uncommon letters".to_string()));
    }

    #[test]
    fn test_repeated_letters() {
        assert!(has_triple_repeat("brrrand"));
        assert!(!has_triple_repeat("bookkeeper"));
        let s = analyze_name_strength("brrrand");
        assert!(s.reasons.contains(&"Repeated letters may confuse".to_string()));
    }

    #[test]
    fn test_needs_work() {
        let s = analyze_name_strength("q");
        assert_eq!(s.reasons[0], "Too short");
        let long = analyze_name_strength("xqzjxqzjxqzjxqzj");
        assert_eq!(long.badge, StrengthBadge::NeedsWork);
        assert_eq!(long.reasons[0], "Too long");
    }
}
