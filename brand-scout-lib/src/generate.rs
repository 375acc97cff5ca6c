//! Name generation: alternate suggestions, bulk query expansion and
//! industry-based idea lists.
//!
//! Everything here is deterministic. The same input always yields the same
//! list in the same order.
//!
//! # Query expansion syntax
//!
//! - `tech AND hub` joins keywords into `techhub`
//! - `cool OR neat + brand`: combine each leading keyword with the last one,
//!   in both orders: `coolbrand`, `brandcool`, `neatbrand`, `brandneat`
//! - `*`: replaced by nothing, then by each filler word
//! - `?`: replaced by letters from a fixed set
//!
//! # Examples
//!
//! ```
//! use brand_scout_lib::generate::{expand_query, generate_suggestions};
//!
//! let names = expand_query("tech AND hub");
//! assert_eq!(names, vec!["techhub".to_string()]);
//!
//! let suggestions = generate_suggestions("acme");
//! assert_eq!(suggestions[0], "goacme");
//! assert!(!suggestions.contains(&"acme".to_string()));
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound on suggestions per name.
pub const MAX_SUGGESTIONS: usize = 8;

/// Upper bound on names produced by one expansion or idea request.
pub const MAX_EXPANSIONS: usize = 20;

const PREFIXES: [&str; 7] = ["go", "get", "try", "use", "my", "the", "hey"];
const SUFFIXES: [&str; 8] = ["hq", "app", "hub", "lab", "co", "io", "now", "dev"];

const FILLER_WORDS: [&str; 20] = [
    "cool", "best", "top", "pro", "go", "my", "the", "hub", "lab", "io", "app", "dev", "ai", "co",
    "net", "digital", "smart", "fast", "ez", "one",
];

/// Letters tried for each `?`; a subset keeps the product small.
const PATTERN_LETTERS: &str = "aeioubcdfghlmnprst";

const NICHE_SUFFIXES: [&str; 8] = ["Hub", "Lab", "Nest", "Box", "Base", "Spot", "Zone", "Deck"];
const NICHE_ADJECTIVES: [&str; 6] = ["Smart", "Swift", "Bold", "Fresh", "Pure", "Bright"];

lazy_static! {
    static ref AND_WORD: Regex = Regex::new(r"(?i)\bAND\b").expect("valid regex");
    static ref AND_SPLIT: Regex = Regex::new(r"(?i)\s+AND\s+").expect("valid regex");
    static ref OR_WORD: Regex = Regex::new(r"(?i)\bOR\b").expect("valid regex");
    static ref OR_SPLIT: Regex = Regex::new(r"(?i)\s+OR\s+|\s*\+\s*").expect("valid regex");
}

/// A generated brand idea with a one-line pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheIdea {
    pub name: String,
    pub description: String,
}

/// Alternate names for `name`: prefixed forms, suffixed forms, then two
/// abbreviations when the name is longer than 6 characters.
///
/// The cleaned input itself is never returned, duplicates are dropped
/// keeping first occurrence, and at most [`MAX_SUGGESTIONS`] come back.
pub fn generate_suggestions(name: &str) -> Vec<String> {
    let clean: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    let mut candidates: Vec<String> = Vec::new();
    let mut push = |candidate: String| {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    };

    for prefix in PREFIXES {
        push(format!("{}{}", prefix, clean));
    }
    for suffix in SUFFIXES {
        push(format!("{}{}", clean, suffix));
    }
    // ASCII-only after cleaning, so byte slicing is safe
    if clean.len() > 6 {
        push(clean[..4].to_string());
        push(format!("{}{}", &clean[..3], &clean[clean.len() - 2..]));
    }

    candidates
        .into_iter()
        .filter(|c| *c != clean)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Expand a bulk query into candidate names.
///
/// A query containing `?` is a letter pattern, one containing `*` is a
/// wildcard, anything else is parsed as a keyword combination. Empty
/// candidates are dropped and at most [`MAX_EXPANSIONS`] are returned.
pub fn expand_query(query: &str) -> Vec<String> {
    let query = query.trim();
    let expanded = if query.contains('?') {
        expand_pattern(query)
    } else if query.contains('*') {
        expand_wildcard(query)
    } else {
        parse_multi_keyword(query)
    };

    let mut names: Vec<String> = Vec::new();
    for name in expanded {
        let name = name.to_lowercase();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names.truncate(MAX_EXPANSIONS);
    names
}

/// Replace the first `*` with nothing, then with each filler word.
pub fn expand_wildcard(pattern: &str) -> Vec<String> {
    let Some((prefix, suffix)) = pattern.split_once('*') else {
        return vec![pattern.to_string()];
    };

    let mut results = vec![format!("{}{}", prefix, suffix)];
    for word in FILLER_WORDS {
        if results.len() >= MAX_EXPANSIONS {
            break;
        }
        results.push(format!("{}{}{}", prefix, word, suffix));
    }
    results
}

/// Replace every `?` with letters from a fixed set, keeping the running
/// product at [`MAX_EXPANSIONS`] after each position.
pub fn expand_pattern(pattern: &str) -> Vec<String> {
    if !pattern.contains('?') {
        return expand_wildcard(pattern);
    }

    let mut results = vec![String::new()];
    for ch in pattern.chars() {
        if ch == '?' {
            let mut next = Vec::with_capacity(MAX_EXPANSIONS);
            'outer: for prefix in &results {
                for letter in PATTERN_LETTERS.chars() {
                    next.push(format!("{}{}", prefix, letter));
                    if next.len() >= MAX_EXPANSIONS {
                        break 'outer;
                    }
                }
            }
            results = next;
        } else {
            for r in results.iter_mut() {
                r.push(ch);
            }
        }
    }
    results.truncate(MAX_EXPANSIONS);
    results
}

/// Combine keywords joined by `AND`, `OR` or `+`.
///
/// Without any operator the input is lowercased with whitespace removed.
pub fn parse_multi_keyword(input: &str) -> Vec<String> {
    let normalized = input.trim();

    if AND_WORD.is_match(normalized) {
        let joined: String = AND_SPLIT
            .split(normalized)
            .map(|part| part.trim().to_lowercase())
            .collect();
        return vec![joined];
    }

    if OR_WORD.is_match(normalized) || normalized.contains('+') {
        let segments: Vec<String> = OR_SPLIT
            .split(normalized)
            .map(|s| s.trim().to_lowercase())
            .collect();

        let mut results = Vec::new();
        if let Some((base, rest)) = segments.split_last() {
            for segment in rest {
                results.push(format!("{}{}", segment, base));
                results.push(format!("{}{}", base, segment));
            }
        }
        if results.is_empty() {
            return segments;
        }
        results.truncate(MAX_EXPANSIONS);
        return results;
    }

    vec![normalized
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()]
}

/// Brand ideas for an industry keyword.
///
/// The keyword is capitalized and, when longer than 6 characters, cut to
/// its first 60% to form a stem. Returns an empty list for blank input.
pub fn generate_niche_ideas(industry: &str) -> Vec<NicheIdea> {
    let clean = industry.trim();
    let mut chars = clean.chars();
    let Some(first) = chars.next() else {
        return Vec::new();
    };

    let base: String = first
        .to_uppercase()
        .chain(chars.as_str().to_lowercase().chars())
        .collect();
    let lower = base.to_lowercase();
    let len = base.chars().count();
    let short: String = if len > 6 {
        let keep = (len as f64 * 0.6).ceil() as usize;
        base.chars().take(keep).collect()
    } else {
        base.clone()
    };

    let idea = |name: String, description: String| NicheIdea { name, description };
    let mut ideas = Vec::with_capacity(MAX_EXPANSIONS);

    for suffix in NICHE_SUFFIXES {
        ideas.push(idea(
            format!("{}{}", short, suffix),
            format!("{}-focused {} platform", base, suffix.to_lowercase()),
        ));
    }
    for adjective in NICHE_ADJECTIVES {
        ideas.push(idea(
            format!("{}{}", adjective, short),
            format!("{} approach to {}", adjective, lower),
        ));
    }

    ideas.push(idea(format!("{}ify", short), format!("Simplifying {}", lower)));
    ideas.push(idea(format!("{}ly", short), format!("{} made easy", base)));
    ideas.push(idea(
        format!("Go{}", short),
        format!("Your go-to {} solution", lower),
    ));
    ideas.push(idea(format!("{}Pulse", short), format!("The pulse of {}", lower)));
    ideas.push(idea(format!("{}Wave", short), format!("Riding the {} wave", lower)));
    ideas.push(idea(format!("{}Mint", short), format!("Fresh {} ideas", lower)));

    ideas.truncate(MAX_EXPANSIONS);
    ideas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_order_and_cap() {
        let s = generate_suggestions("acme");
        assert_eq!(s.len(), MAX_SUGGESTIONS);
        assert_eq!(
            s,
            vec!["goacme", "getacme", "tryacme", "useacme", "myacme", "theacme", "heyacme", "acmehq"]
        );
    }

    #[test]
    fn test_suggestions_never_contain_original() {
        for name in ["acme", "getflowhub", "zx9", "", "a", "Flow Hub!"] {
            let clean: String = name
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            let s = generate_suggestions(name);
            assert!(s.len() <= MAX_SUGGESTIONS);
            assert!(!s.contains(&clean), "{} leaked into {:?}", clean, s);
        }
    }

    #[test]
    fn test_suggestions_cleans_input() {
        let s = generate_suggestions("Flow Hub!");
        assert_eq!(s[0], "goflowhub");
    }

    #[test]
    fn test_empty_name_drops_bare_affixes() {
        // "" + "go" etc. are fine, but the empty string itself never appears
        let s = generate_suggestions("");
        assert_eq!(s[0], "go");
        assert!(!s.contains(&String::new()));
    }

    #[test]
    fn test_and_joins_keywords() {
        assert_eq!(parse_multi_keyword("tech AND hub"), vec!["techhub"]);
        assert_eq!(parse_multi_keyword("Tech and Hub and Lab"), vec!["techhublab"]);
    }

    #[test]
    fn test_or_combines_with_last_segment() {
        assert_eq!(
            parse_multi_keyword("cool OR neat + brand"),
            vec!["coolbrand", "brandcool", "neatbrand", "brandneat"]
        );
    }

    #[test]
    fn test_plain_keyword_strips_whitespace() {
        assert_eq!(parse_multi_keyword("  My Brand "), vec!["mybrand"]);
    }

    #[test]
    fn test_wildcard_expansion() {
        let names = expand_wildcard("*hub");
        assert_eq!(names.len(), MAX_EXPANSIONS);
        assert_eq!(names[0], "hub");
        assert_eq!(names[1], "coolhub");
        assert_eq!(names[19], "ezhub");
    }

    #[test]
    fn test_pattern_expansion_caps_product() {
        let single = expand_pattern("go?");
        assert_eq!(single.len(), PATTERN_LETTERS.len());
        assert_eq!(single[0], "goa");

        let double = expand_pattern("??x");
        assert_eq!(double.len(), MAX_EXPANSIONS);
        assert_eq!(double[0], "aax");
        assert_eq!(double[18], "eax");
    }

    #[test]
    fn test_expand_query_dispatch() {
        assert_eq!(expand_query("tech AND hub"), vec!["techhub"]);
        assert!(expand_query("*ly").contains(&"coolly".to_string()));
        assert!(expand_query("a?").contains(&"ab".to_string()));
        assert!(expand_query("   ").is_empty());
    }

    #[test]
    fn test_niche_ideas_shape() {
        let ideas = generate_niche_ideas("fitness");
        assert_eq!(ideas.len(), 20);
        // 7 chars -> ceil(4.2) = 5
        assert_eq!(ideas[0].name, "FitneHub");
        assert_eq!(ideas[0].description, "Fitness-focused hub platform");
        assert_eq!(ideas[8].name, "SmartFitne");
        assert_eq!(ideas[8].description, "Smart approach to fitness");
        assert_eq!(ideas[16].name, "GoFitne");
        assert_eq!(ideas[19].description, "Fresh fitness ideas");
    }

    #[test]
    fn test_niche_ideas_short_and_blank() {
        let ideas = generate_niche_ideas("PETS");
        assert_eq!(ideas[0].name, "PetsHub");
        assert!(generate_niche_ideas("   ").is_empty());
    }
}
