//! "Did you mean" correction against a small brand-word dictionary.

const BRAND_WORDS: [&str; 104] = [
    "tech", "digital", "media", "cloud", "data", "smart", "pixel", "byte", "code", "link", "sync",
    "flow", "wave", "spark", "nova", "core", "edge", "peak", "zone", "star", "light", "bright",
    "swift", "rapid", "prime", "elite", "ultra", "mega", "micro", "nano", "mini", "maxi", "super",
    "hyper", "meta", "auto", "cyber", "design", "studio", "craft", "works", "labs", "forge",
    "nest", "hive", "vault", "pulse", "vibe", "bold", "true", "pure", "clear", "blue", "green",
    "red", "black", "white", "gold", "silver", "iron", "steel", "stone", "fire", "ice", "ocean",
    "river", "mountain", "forest", "garden", "field", "city", "urban", "global", "local",
    "north", "south", "east", "west", "atlas", "orbit", "lunar", "solar", "cosmic", "venture",
    "capital", "market", "trade", "commerce", "brand", "creative", "visual", "motion", "sound",
    "voice", "signal", "beacon", "guide", "scout", "finder", "seeker", "hunter", "builder",
    "maker", "crafter",
];

/// Closest dictionary word to `input`, if it looks like a typo of one.
///
/// Inputs shorter than 3 or longer than 30 characters (after cleaning to
/// `[a-z0-9]`) are skipped. Collapsing repeated letters is tried first; then
/// the nearest word within edit distance 1-2 wins, earliest on ties. An
/// exact dictionary word is never "corrected".
pub fn suggest_correction(input: &str) -> Option<String> {
    let clean: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    if clean.len() < 3 || clean.len() > 30 || BRAND_WORDS.contains(&clean.as_str()) {
        return None;
    }

    let collapsed = collapse_runs(&clean);
    if collapsed != clean && BRAND_WORDS.contains(&collapsed.as_str()) {
        return Some(collapsed);
    }

    let mut best: Option<(&str, usize)> = None;
    for word in BRAND_WORDS {
        if word.len().abs_diff(clean.len()) > 2 {
            continue;
        }
        let dist = levenshtein(&clean, word);
        if (1..=2).contains(&dist) && best.map_or(true, |(_, d)| dist < d) {
            best = Some((word, dist));
        }
    }
    best.map(|(word, _)| word.to_string())
}

/// Edit distance with unit-cost insert, delete and substitute.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// "creeative" -> "creative"
fn collapse_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = None;
    for c in s.chars() {
        if last != Some(c) {
            out.push(c);
        }
        last = Some(c);
    }
    out
}
