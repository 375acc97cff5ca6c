//! Plain-text renderings of a [`BrandReport`] for download or piping.

use crate::types::{Availability, BrandReport};

/// CSV-style report: header lines, a domain table, a username table and the
/// suggestion list, separated by blank lines.
pub fn export_csv(report: &BrandReport) -> String {
    let mut lines = vec![
        "BrandScout Report".to_string(),
        format!("Query,{}", report.query),
        format!("Score,{}/100", report.score),
        String::new(),
        "Domain,Status".to_string(),
    ];
    for d in &report.domains {
        lines.push(format!("{},{}", d.domain, d.status));
    }

    lines.push(String::new());
    lines.push("Platform,Username,Status".to_string());
    for u in &report.usernames {
        lines.push(format!("{},{},{}", u.platform, u.username, u.status));
    }

    lines.push(String::new());
    lines.push("Suggestions".to_string());
    lines.extend(report.suggestions.iter().cloned());

    lines.join("\n")
}

/// Boxed text report with status icons and a closing disclaimer.
pub fn export_txt(report: &BrandReport) -> String {
    const RULE: &str = "═══════════════════════════════════";

    let mut lines = vec![
        RULE.to_string(),
        "       BrandScout Report".to_string(),
        RULE.to_string(),
        format!("Query: {}", report.query),
        format!("Score: {}/100", report.score),
        String::new(),
        "── Domains ──".to_string(),
    ];
    for d in &report.domains {
        lines.push(format!("  {} {} — {}", status_icon(d.status), d.domain, d.status));
    }

    lines.push(String::new());
    lines.push("── Usernames ──".to_string());
    for u in &report.usernames {
        lines.push(format!(
            "  {} {} (@{}) — {}",
            status_icon(u.status),
            u.platform,
            u.username,
            u.status
        ));
    }

    lines.push(String::new());
    lines.push("── Suggestions ──".to_string());
    for s in &report.suggestions {
        lines.push(format!("  • {}", s));
    }

    lines.push(String::new());
    lines.push("Disclaimer: Availability can change quickly.".to_string());
    lines.join("\n")
}

fn status_icon(status: Availability) -> &'static str {
    match status {
        Availability::Available => "✓",
        Availability::Taken => "✗",
        Availability::Unknown => "?",
    }
}
