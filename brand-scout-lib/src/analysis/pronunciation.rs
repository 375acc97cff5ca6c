//! Pronounceability heuristic.

use crate::scoring::is_vowel;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref CONSONANT_CLUSTER: Regex =
        Regex::new(r"(?i)[bcdfghjklmnpqrstvwxyz]{3,}").expect("valid regex");
    static ref AMBIGUOUS_COMBO: Regex =
        Regex::new(r"(?i)gh|ph|ough|tion|sion|tch|sch|thr|chr|psy|pn|kn|wr|mn").expect("valid regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PronunciationRating {
    #[serde(rename = "Easy to pronounce")]
    Easy,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Tricky to pronounce")]
    Tricky,
}

impl fmt::Display for PronunciationRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PronunciationRating::Easy => write!(f, "Easy to pronounce"),
            PronunciationRating::Moderate => write!(f, "Moderate"),
            PronunciationRating::Tricky => write!(f, "Tricky to pronounce"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub rating: PronunciationRating,
    pub details: Vec<String>,
}

/// Rate how easy `name` is to say out loud.
///
/// Penalty points accumulate: 2 per consonant cluster (3+ consonants in a
/// row), 1 per ambiguous letter combination, 1-2 for long syllable counts,
/// 2 for very few vowels and 1 for very many. 4 or more is tricky, 2 or
/// more moderate.
pub fn analyze_pronunciation(name: &str) -> Pronunciation {
    let clean: String = name.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let mut details = Vec::new();
    let mut penalty = 0usize;

    let clusters = CONSONANT_CLUSTER.find_iter(&clean).count();
    if clusters > 0 {
        penalty += clusters * 2;
        details.push(format!("{} consonant cluster(s)", clusters));
    }

    let mut combos: Vec<String> = Vec::new();
    let mut combo_count = 0;
    for m in AMBIGUOUS_COMBO.find_iter(&clean) {
        combo_count += 1;
        let combo = m.as_str().to_lowercase();
        if !combos.contains(&combo) {
            combos.push(combo);
        }
    }
    if combo_count > 0 {
        penalty += combo_count;
        details.push(format!("Ambiguous combos: {}", combos.join(", ")));
    }

    let syllables = count_syllables(&clean);
    if syllables > 4 {
        penalty += 2;
        details.push(format!("{} syllables (long)", syllables));
    } else if syllables > 3 {
        penalty += 1;
        details.push(format!("{} syllables", syllables));
    } else {
        details.push(format!("{} syllable(s)", syllables));
    }

    let vowels = clean.chars().filter(|c| is_vowel(*c)).count();
    let ratio = vowels as f64 / clean.len().max(1) as f64;
    if ratio < 0.15 {
        penalty += 2;
        details.push("Very few vowels".to_string());
    } else if ratio > 0.65 {
        penalty += 1;
        details.push("Many vowels".to_string());
    }

    let rating = match penalty {
        4.. => PronunciationRating::Tricky,
        2..=3 => PronunciationRating::Moderate,
        _ => PronunciationRating::Easy,
    };

    Pronunciation { rating, details }
}

/// Vowel-group syllable estimate with a silent-`e` adjustment.
///
/// Words of 3 letters or fewer count as one syllable; the result is never
/// below one.
pub fn count_syllables(word: &str) -> usize {
    let w: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if w.len() <= 3 {
        return 1;
    }

    let is_group_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count: isize = 0;
    let mut in_group = false;
    for &c in &w {
        let vowel = is_group_vowel(c);
        if vowel && !in_group {
            count += 1;
        }
        in_group = vowel;
    }

    let n = w.len();
    let ends_le = w[n - 2] == 'l' && w[n - 1] == 'e';
    if w[n - 1] == 'e' && !ends_le {
        count -= 1;
    }
    if ends_le && !is_group_vowel(w[n - 3]) {
        count += 1;
    }

    count.max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables() {
        assert_eq!(count_syllables("zx"), 1);
        assert_eq!(count_syllables("acme"), 1);
        assert_eq!(count_syllables("rocket"), 2);
        // consonant + "le" adds a syllable on top of the vowel groups
        assert_eq!(count_syllables("table"), 3);
        assert_eq!(count_syllables("getflowhub"), 3);
        assert_eq!(count_syllables("brrrr"), 1);
    }

    #[test]
    fn test_easy_name() {
        let p = analyze_pronunciation("acme");
        assert_eq!(p.rating, PronunciationRating::Easy);
        assert_eq!(p.details, vec!["1 syllable(s)"]);
    }

    #[test]
    fn test_single_cluster_is_moderate() {
        // "tfl" in getflowhub
        let p = analyze_pronunciation("getflowhub");
        assert_eq!(p.rating, PronunciationRating::Moderate);
        assert_eq!(p.details, vec!["1 consonant cluster(s)", "3 syllable(s)"]);
    }

    #[test]
    fn test_clusters_make_it_tricky() {
        // "strngth": one 7-consonant cluster (2), "th" is not in the list,
        // no vowels at all (2)
        let p = analyze_pronunciation("strngth");
        assert_eq!(p.rating, PronunciationRating::Tricky);
        assert!(p.details.contains(&"1 consonant cluster(s)".to_string()));
        assert!(p.details.contains(&"Very few vowels".to_string()));
    }

    #[test]
    fn test_ambiguous_combos_deduplicated() {
        let p = analyze_pronunciation("phophone");
        assert!(p.details.contains(&"Ambiguous combos: ph".to_string()));
        assert_eq!(p.rating, PronunciationRating::Moderate);
    }

    #[test]
    fn test_digits_are_ignored() {
        let p = analyze_pronunciation("zx9");
        // "zx": no cluster, no vowels
        assert_eq!(p.rating, PronunciationRating::Moderate);
        assert_eq!(p.details, vec!["1 syllable(s)", "Very few vowels"]);
    }

    #[test]
    fn test_many_vowels() {
        let p = analyze_pronunciation("aeiou");
        assert!(p.details.contains(&"Many vowels".to_string()));
        assert_eq!(p.rating, PronunciationRating::Easy);
    }
}
