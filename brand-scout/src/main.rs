//! BrandScout CLI Application
//!
//! A command-line interface for checking whether a brand name is free as a
//! domain and as a social handle. This CLI is a thin front end over
//! brand-scout-lib: it collects queries, resolves configuration and renders
//! reports.

mod ui;

use brand_scout_lib::{
    expand_query, export_csv, export_txt, find_platform, generate_niche_ideas, get_all_tlds,
    load_env_config, tld_info, BrandChecker, BrandReport, CheckConfig, CheckRequest,
    ConfigManager, EnvConfig, FileConfig, PLATFORMS,
};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for brand-scout
#[derive(Parser, Debug)]
#[command(name = "brand-scout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check a brand name across domains and social platforms")]
#[command(
    long_about = "Check a brand name across domains (RDAP with DNS fallback) and social platform handles.\n\nEach report carries a 0-100 score, name suggestions and a quality analysis. Results marked unknown could not be decided and need manual verification."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Brand names or domains to check
    #[arg(value_name = "QUERIES", help_heading = "Query")]
    pub queries: Vec<String>,

    /// Treat each query as a pattern (AND, OR, +, *, ?) and check every expansion
    #[arg(long = "expand", help_heading = "Query")]
    pub expand: bool,

    /// With --expand, print the expansions without checking them
    #[arg(long = "dry-run", help_heading = "Query")]
    pub dry_run: bool,

    /// Print brand name ideas for an industry and exit
    #[arg(long = "ideas", value_name = "INDUSTRY", help_heading = "Query")]
    pub ideas: Option<String>,

    /// TLDs to check (comma-separated or multiple -t flags)
    #[arg(short = 't', long = "tld", value_name = "TLD", value_delimiter = ',', action = clap::ArgAction::Append, help_heading = "Selection")]
    pub tlds: Option<Vec<String>>,

    /// Platforms to check (comma-separated or multiple flags)
    #[arg(long = "platform", value_name = "NAME", value_delimiter = ',', action = clap::ArgAction::Append, help_heading = "Selection")]
    pub platforms: Option<Vec<String>>,

    /// List supported TLDs and exit
    #[arg(long = "list-tlds", help_heading = "Selection")]
    pub list_tlds: bool,

    /// List supported platforms and exit
    #[arg(long = "list-platforms", help_heading = "Selection")]
    pub list_platforms: bool,

    /// Output the full report as JSON
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Output the report as CSV
    #[arg(long = "csv", help_heading = "Output Format")]
    pub csv: bool,

    /// Output the boxed text report
    #[arg(long = "txt", help_heading = "Output Format")]
    pub txt: bool,

    /// Grouped, colored output with the analysis block
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Debug logging
    #[arg(short = 'd', long = "debug", help_heading = "Configuration")]
    pub debug: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

/// How reports are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Plain,
    Pretty,
    Json,
    Csv,
    Txt,
}

/// Output switches as they accumulate through the configuration layers.
#[derive(Debug, Default, Clone, Copy)]
struct OutputPrefs {
    pretty: bool,
    json: bool,
    csv: bool,
    txt: bool,
}

impl OutputPrefs {
    fn resolve(self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else if self.txt {
            OutputFormat::Txt
        } else if self.pretty {
            OutputFormat::Pretty
        } else {
            OutputFormat::Plain
        }
    }
}

/// Everything a run needs after configuration precedence is applied.
struct Settings {
    config: CheckConfig,
    output: OutputFormat,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if args.list_tlds {
        print_tlds();
        return;
    }
    if args.list_platforms {
        print_platforms();
        return;
    }
    if let Some(industry) = &args.ideas {
        if let Err(e) = print_ideas(industry, args.json) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    }

    if let Err(e) = run_brand_check(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` and `--verbose` pick the
/// level, defaulting to warnings only.
fn init_logging(args: &Args) {
    let default_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    // Listing flags are self-contained
    if args.list_tlds || args.list_platforms {
        return Ok(());
    }

    let output_formats = [args.json, args.csv, args.txt]
        .iter()
        .filter(|&&x| x)
        .count();
    if output_formats > 1 {
        return Err("Cannot specify multiple output formats (--json, --csv, --txt)".to_string());
    }

    if let Some(industry) = &args.ideas {
        if !industry.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err("--ideas needs an industry containing letters or digits".to_string());
        }
        return Ok(());
    }

    if args.queries.is_empty() {
        return Err(
            "You must specify at least one query, or use --ideas / --list-tlds / --list-platforms"
                .to_string(),
        );
    }

    if args.dry_run && !args.expand {
        return Err("--dry-run only applies together with --expand".to_string());
    }

    if let Some(tlds) = &args.tlds {
        for tld in tlds {
            if tld_info(tld).is_none() {
                return Err(format!(
                    "Unknown TLD '{}'. Use --list-tlds to see supported TLDs",
                    tld.trim()
                ));
            }
        }
    }

    if let Some(platforms) = &args.platforms {
        for platform in platforms {
            if find_platform(platform).is_none() {
                return Err(format!(
                    "Unknown platform '{}'. Use --list-platforms to see supported platforms",
                    platform.trim()
                ));
            }
        }
    }

    Ok(())
}

fn print_tlds() {
    use console::Style;

    let heading = Style::new().yellow().bold();
    let tld_style = Style::new().green().bold();

    println!("{}", heading.apply_to("Supported TLDs:"));
    for tld in get_all_tlds() {
        let weight = tld_info(tld).map(|info| info.weight).unwrap_or_default();
        println!(
            "  {}  weight {}",
            tld_style.apply_to(format!("{:<6}", tld)),
            weight
        );
    }
}

fn print_platforms() {
    use console::Style;

    let heading = Style::new().yellow().bold();
    let name_style = Style::new().green().bold();

    println!("{}", heading.apply_to("Supported platforms:"));
    for platform in PLATFORMS.iter() {
        let note = if platform.is_probeable() {
            String::new()
        } else {
            format!("  {}", console::style("(never probed, always unknown)").dim())
        };
        println!(
            "  {}  {}{}",
            name_style.apply_to(format!("{:<10}", platform.name)),
            platform.profile_url_for("<name>"),
            note
        );
    }
}

fn print_ideas(industry: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ideas = generate_niche_ideas(industry);
    if json {
        println!("{}", serde_json::to_string_pretty(&ideas)?);
    } else {
        for idea in &ideas {
            println!("{:<20} {}", idea.name, idea.description);
        }
    }
    Ok(())
}

/// Main brand checking logic
async fn run_brand_check(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let queries = collect_queries(&args)?;

    if args.dry_run {
        for query in &queries {
            println!("{}", query);
        }
        return Ok(());
    }

    let settings = build_config(&args)?;
    let checker = BrandChecker::with_config(settings.config)?;

    let mut reports = Vec::with_capacity(queries.len());
    let mut failures = 0usize;

    // One checker for every query so cache and politeness state carry over
    for query in &queries {
        let spinner = (settings.output == OutputFormat::Pretty)
            .then(|| ui::Spinner::start(format!("Checking {}...", query)));

        let result = checker.check(&CheckRequest::new(query.as_str())).await;

        if let Some(spinner) = spinner {
            spinner.stop().await;
        }

        match result {
            Ok(report) => reports.push(report),
            Err(e) if queries.len() == 1 => return Err(e.into()),
            Err(e) => {
                eprintln!("Error: {}", e);
                failures += 1;
            }
        }
    }

    display_reports(&reports, settings.output)?;

    if failures > 0 {
        return Err(format!("{} of {} queries failed", failures, queries.len()).into());
    }
    Ok(())
}

/// The queries to check: as given, or every expansion with `--expand`.
fn collect_queries(args: &Args) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if !args.expand {
        return Ok(args.queries.clone());
    }

    let mut queries: Vec<String> = Vec::new();
    for pattern in &args.queries {
        let expansions = expand_query(pattern);
        if expansions.is_empty() {
            return Err(format!("Pattern '{}' produced no names to check", pattern).into());
        }
        for expansion in expansions {
            if !queries.contains(&expansion) {
                queries.push(expansion);
            }
        }
    }
    info!(count = queries.len(), "expanded queries");
    Ok(queries)
}

/// Build configuration by merging all sources in precedence order.
///
/// Precedence (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (BS_*)
/// 3. Config file (--config, BS_CONFIG, or discovered)
/// 4. Built-in defaults
fn build_config(args: &Args) -> Result<Settings, Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(args.verbose);
    let env_config = load_env_config();

    // Step 1: config file
    let file_config = if let Some(path) = &args.config {
        info!(path = %path, "using config file from --config");
        config_manager
            .load_file(path)
            .map_err(|e| format!("Failed to load config file '{}': {}", path, e))?
    } else if let Some(path) = &env_config.config {
        info!(path = %path, "using config file from BS_CONFIG");
        config_manager
            .load_file(path)
            .map_err(|e| format!("Failed to load config file '{}': {}", path, e))?
    } else {
        config_manager.discover_and_load()
    };

    let mut prefs = OutputPrefs::default();
    let config = merge_file_config(CheckConfig::default(), file_config, &mut prefs);

    // Step 2: environment
    let config = apply_environment_config(config, &env_config, &mut prefs);

    // Step 3: CLI
    let config = apply_cli_args_to_config(config, args, &mut prefs);

    Ok(Settings {
        config,
        output: prefs.resolve(),
    })
}

fn merge_file_config(
    mut config: CheckConfig,
    file_config: FileConfig,
    prefs: &mut OutputPrefs,
) -> CheckConfig {
    if let Some(defaults) = file_config.defaults {
        if let Some(tlds) = defaults.tlds {
            config.tlds = Some(tlds);
        }
        if let Some(platforms) = defaults.platforms {
            config.platforms = Some(platforms);
        }
        if let Some(pretty) = defaults.pretty {
            prefs.pretty = pretty;
        }
        if let Some(json) = defaults.json {
            prefs.json = json;
        }
        if let Some(csv) = defaults.csv {
            prefs.csv = csv;
        }
    }

    match file_config.probe {
        Some(probe) => probe.apply(config),
        None => config,
    }
}

fn apply_environment_config(
    mut config: CheckConfig,
    env_config: &EnvConfig,
    prefs: &mut OutputPrefs,
) -> CheckConfig {
    if env_config.has_output_format_conflict() {
        warn!("both BS_JSON and BS_CSV are set, JSON wins unless a flag says otherwise");
    }

    if let Some(tlds) = &env_config.tlds {
        config.tlds = Some(tlds.clone());
    }
    if let Some(platforms) = &env_config.platforms {
        config.platforms = Some(platforms.clone());
    }
    if let Some(timeout) = env_config.http_timeout {
        config.http_timeout = timeout;
    }
    if let Some(timeout) = env_config.rdap_timeout {
        config.rdap_timeout = timeout;
    }
    if let Some(pretty) = env_config.pretty {
        prefs.pretty = pretty;
    }
    if let Some(json) = env_config.json {
        prefs.json = json;
    }
    if let Some(csv) = env_config.csv {
        prefs.csv = csv;
    }

    config
}

/// Apply CLI arguments to config (highest precedence).
///
/// Boolean flags only override lower layers when passed; an explicit output
/// format flag replaces whatever format the lower layers chose.
fn apply_cli_args_to_config(
    mut config: CheckConfig,
    args: &Args,
    prefs: &mut OutputPrefs,
) -> CheckConfig {
    if args.tlds.is_some() {
        config.tlds = args.tlds.clone();
    }
    if args.platforms.is_some() {
        config.platforms = args.platforms.clone();
    }

    if args.json || args.csv || args.txt {
        prefs.json = args.json;
        prefs.csv = args.csv;
        prefs.txt = args.txt;
    }
    if args.pretty {
        prefs.pretty = true;
    }

    config
}

/// Render every report in the chosen format.
fn display_reports(
    reports: &[BrandReport],
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        OutputFormat::Json => {
            let json = match reports {
                [single] => serde_json::to_string_pretty(single)?,
                _ => serde_json::to_string_pretty(reports)?,
            };
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let blocks: Vec<String> = reports.iter().map(export_csv).collect();
            println!("{}", blocks.join("\n\n"));
        }
        OutputFormat::Txt => {
            let blocks: Vec<String> = reports.iter().map(export_txt).collect();
            println!("{}", blocks.join("\n\n"));
        }
        OutputFormat::Pretty => {
            for report in reports {
                ui::print_report(report);
            }
        }
        OutputFormat::Plain => {
            for report in reports {
                display_text_report(report);
            }
        }
    }
    Ok(())
}

/// Compact uncolored rendering: one line per domain and platform.
fn display_text_report(report: &BrandReport) {
    println!("{} (score {}/100)", report.name, report.score);
    for domain in &report.domains {
        println!("  {:<28} {}", domain.domain, domain.status);
    }
    for username in &report.usernames {
        println!(
            "  {:<28} {}",
            format!("{} @{}", username.platform, username.username),
            username.status
        );
    }
    if !report.suggestions.is_empty() {
        println!("  suggestions: {}", report.suggestions.join(", "));
    }
    if let Some(correction) = &report.did_you_mean {
        println!("  did you mean: {}", correction);
    }
}
