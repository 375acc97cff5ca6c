//! Pretty-mode display logic for the brand-scout CLI.
//!
//! This module handles all `--pretty` output: the spinner, the report
//! header, availability grouped by status, and the analysis block. Uses
//! only the `console` crate.

use brand_scout_lib::analysis::Level;
use brand_scout_lib::{Availability, BrandReport};
use console::{pad_str, style, Alignment, StyledObject, Term};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ── Spinner ──────────────────────────────────────────────────────────────────

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// An async braille-dot spinner that writes to stderr so stdout stays clean.
pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    /// Start a new spinner with the given message (e.g. "Checking acme...").
    pub fn start(message: String) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = tokio::spawn(async move {
            let term = Term::stderr();
            if !term.is_term() {
                return;
            }
            let mut idx = 0usize;
            while running_clone.load(Ordering::Relaxed) {
                let frame = SPINNER_FRAMES[idx % SPINNER_FRAMES.len()];
                let _ = term.clear_line();
                let _ = term.write_str(&format!("{} {}", style(frame).cyan(), message));
                idx += 1;
                tokio::time::sleep(Duration::from_millis(80)).await;
            }
            let _ = term.clear_line();
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop the spinner and clear the line.
    pub async fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.await;
        }
    }
}

// ── Report ───────────────────────────────────────────────────────────────────

/// One row inside a grouped section.
struct Row {
    label: String,
    status: Availability,
    detail: Option<String>,
}

/// Print a full report: header, grouped domains and handles, suggestions
/// and the analysis block.
pub fn print_report(report: &BrandReport) {
    print_header(report);

    let domains: Vec<Row> = report
        .domains
        .iter()
        .map(|d| Row {
            label: d.domain.clone(),
            status: d.status,
            detail: Some(format!("via {}", d.source)),
        })
        .collect();
    print_section("Domains", &domains);

    let usernames: Vec<Row> = report
        .usernames
        .iter()
        .map(|u| Row {
            label: format!("{} @{}", u.platform, u.username),
            status: u.status,
            detail: (u.status != Availability::Unknown)
                .then(|| format!("{:.0}% confidence", u.confidence * 100.0)),
        })
        .collect();
    print_section("Usernames", &usernames);

    if !report.suggestions.is_empty() {
        println!("  {}", style("Suggestions").bold());
        println!("    {}", report.suggestions.join(", "));
        println!();
    }

    print_analysis(report);

    let unknown = report
        .domains
        .iter()
        .filter(|d| d.status == Availability::Unknown)
        .count()
        + report
            .usernames
            .iter()
            .filter(|u| u.status == Availability::Unknown)
            .count();
    if unknown > 0 {
        println!(
            "  {}",
            style(format!(
                "{} result{} could not be verified automatically; check {} by hand.",
                unknown,
                if unknown == 1 { "" } else { "s" },
                if unknown == 1 { "it" } else { "them" },
            ))
            .yellow()
        );
        println!();
    }
}

fn print_header(report: &BrandReport) {
    println!(
        "{} {} {}",
        style("brand-scout").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!("— {} ({})", report.name, report.interpretation)).dim(),
    );
    println!("  Score: {}", score_style(report.score));
    if let Some(correction) = &report.did_you_mean {
        println!("  Did you mean {}?", style(correction).cyan().bold());
    }
    println!();
}

fn score_style(score: u8) -> StyledObject<String> {
    let text = format!("{}/100", score);
    match score {
        70..=100 => style(text).green().bold(),
        40..=69 => style(text).yellow().bold(),
        _ => style(text).red().bold(),
    }
}

/// Print `rows` grouped by status: Available, Taken, Unknown.
/// Empty groups are omitted entirely.
fn print_section(title: &str, rows: &[Row]) {
    println!("  {}", style(title).bold());

    for (status, heading) in [
        (Availability::Available, "Available"),
        (Availability::Taken, "Taken"),
        (Availability::Unknown, "Unknown"),
    ] {
        let group: Vec<&Row> = rows.iter().filter(|r| r.status == status).collect();
        if group.is_empty() {
            continue;
        }

        let label = format!("── {} ({}) ", heading, group.len());
        let rule = "─".repeat(44usize.saturating_sub(label.chars().count()));
        match status {
            Availability::Available => {
                println!("  {}{}", style(label).green().bold(), style(rule).green().dim())
            }
            Availability::Taken => {
                println!("  {}{}", style(label).red().bold(), style(rule).red().dim())
            }
            Availability::Unknown => {
                println!("  {}{}", style(label).yellow().bold(), style(rule).yellow().dim())
            }
        }

        for row in group {
            let padded = pad_str(&row.label, 30, Alignment::Left, Some(".."));
            match &row.detail {
                Some(detail) => println!("    {}  {}", style(padded).white(), style(detail).dim()),
                None => println!("    {}", style(padded).white()),
            }
        }
    }
    println!();
}

fn print_analysis(report: &BrandReport) {
    let analysis = &report.analysis;
    println!("  {}", style("Analysis").bold());

    println!(
        "    {:<16}{} ({}/100)",
        "Strength",
        analysis.name_strength.badge,
        analysis.name_strength.score
    );
    for reason in &analysis.name_strength.reasons {
        println!("      {}", style(reason).dim());
    }

    println!(
        "    {:<16}{}  {}",
        "Pronunciation",
        analysis.pronunciation.rating,
        style(analysis.pronunciation.details.join(", ")).dim()
    );
    println!("    {:<16}{}", "Sentiment", analysis.sentiment.rating);

    let risk = &analysis.trademark_risk;
    println!("    {:<16}{}", "Trademark risk", level_style(risk.level));
    for warning in &risk.warnings {
        println!("      {}", style(warning).dim());
    }
    println!("      {}", style(&risk.search_url).dim().underlined());

    let market = &analysis.market;
    println!(
        "    {:<16}{} (demand {}/100)",
        "Market", market.niche_demand, market.demand_score
    );
    println!("      {}", style(&market.explanation).dim());

    let breakdown = &analysis.score_breakdown;
    println!(
        "    {:<16}domains {}/{} ({}%), handles {}/{} ({}%), readability {}, length {} ({} chars)",
        "Breakdown",
        breakdown.domain_available,
        breakdown.domain_total,
        breakdown.domain_percent,
        breakdown.platform_available,
        breakdown.platform_total,
        breakdown.platform_percent,
        breakdown.readability_rating,
        breakdown.length_rating,
        breakdown.length_chars,
    );
    for tip in &breakdown.tips {
        println!("      {} {}", style("•").cyan(), tip);
    }
    println!();
}

fn level_style(level: Level) -> StyledObject<String> {
    let text = level.to_string();
    match level {
        Level::Low => style(text).green(),
        Level::Medium => style(text).yellow(),
        Level::High => style(text).red().bold(),
    }
}
