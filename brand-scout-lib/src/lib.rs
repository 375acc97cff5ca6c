//! # Brand Scout Library
//!
//! Checks whether a brand name is free as a domain across a fixed set of
//! TLDs and as a handle across a dozen social platforms, then scores the
//! name and explains the score.
//!
//! Domain probes ask the registry's RDAP service first and fall back to
//! DNS. Platform probes fetch the public profile URL and classify the
//! response per platform. Every outbound request goes through a per-host
//! politeness layer, and every result is cached for a few minutes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brand_scout_lib::{BrandChecker, CheckRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = BrandChecker::new()?;
//!     let report = checker.check(&CheckRequest::new("getflowhub")).await?;
//!
//!     for domain in &report.domains {
//!         println!("{} - {}", domain.domain, domain.status);
//!     }
//!     println!("Score: {}/100", report.score);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **RDAP + DNS**: registry lookup with address-record fallback
//! - **Platform probes**: data-driven per-platform classification rules
//! - **Politeness**: per-host concurrency cap and randomized spacing
//! - **Caching**: short TTL result cache shared across requests
//! - **Analysis**: score, suggestions, pronunciation, sentiment, trademark risk

// Re-export main public API types and functions
// This makes them available as brand_scout_lib::TypeName
pub use cache::ResultCache;
pub use checker::BrandChecker;
pub use concurrent::{
    gather_ordered, Classification, ProbeInfrastructure, ProbeOutcome, FAILURE_CONFIDENCE,
};
pub use config::{
    load_env_config, load_env_config_from, parse_timeout_string, ConfigManager, DefaultsConfig,
    EnvConfig, FileConfig, ProbeConfig,
};
pub use domains::DomainProber;
pub use error::BrandScoutError;
pub use export::{export_csv, export_txt};
pub use platforms::{
    find_platform, get_all_platforms, select_platforms, Classifier, Platform, PLATFORMS,
};
pub use politeness::{PolitenessLayer, PolitenessPermit};
pub use protocols::dns::{DnsLookup, DnsOutcome, HickoryDns};
pub use protocols::http::{HttpFetch, HttpRequest, HttpResponse, ProbeMethod, ReqwestFetcher};
pub use protocols::registry::{
    get_all_tlds, rdap_url, select_tlds, tld_info, tld_weight, total_tld_weight, TldInfo,
    SUPPORTED_TLDS,
};
pub use scoring::calculate_score;
pub use types::{
    Availability, BrandReport, CandidateName, CheckConfig, CheckRequest, DomainEntry,
    Interpretation, ProbeResult, ProbeSource, ProbeTarget, UsernameEntry,
};
pub use usernames::UsernameProber;
pub use utils::{parse_query, validate_query, MAX_QUERY_LEN};

// Public modules
pub mod analysis;
pub mod generate;
pub mod scoring;

// Re-export generation and analysis entry points for convenience
pub use analysis::{analyze_name, describe_for_ai, suggest_correction, NameAnalysis};
pub use generate::{expand_query, generate_niche_ideas, generate_suggestions, NicheIdea};

// Internal modules - these are not part of the public API
mod cache;
mod checker;
mod concurrent;
mod config;
mod domains;
mod error;
mod export;
mod platforms;
mod politeness;
mod protocols;
mod types;
mod usernames;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, BrandScoutError>;

// Library version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
