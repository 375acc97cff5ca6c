//! Configuration file parsing and management.
//!
//! This module handles loading configuration from TOML files and `BS_*`
//! environment variables, and merging them with proper precedence rules:
//! defaults < config file < environment < CLI flags.

use crate::error::BrandScoutError;
use crate::platforms::find_platform;
use crate::protocols::registry::tld_info;
use crate::types::CheckConfig;
use crate::utils::split_list;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Configuration loaded from TOML files.
///
/// ```toml
/// [defaults]
/// tlds = ["com", "io"]
/// platforms = ["GitHub", "Reddit"]
/// pretty = true
///
/// [probe]
/// http_timeout = "10s"
/// max_per_host = 2
/// min_spacing_ms = 300
/// max_spacing_ms = 800
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    /// Probe timeouts and politeness tuning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<ProbeConfig>,
}

/// Default values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default TLD subset ("com" or ".com")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlds: Option<Vec<String>>,

    /// Default platform subset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<bool>,
}

/// Probe tuning. Timeouts are strings such as "5s", "2m" or "750ms".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProbeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdap_timeout: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_timeout: Option<String>,

    /// Concurrent requests allowed per remote host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_host: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_spacing_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_spacing_ms: Option<u64>,
}

impl ProbeConfig {
    /// Overlay the values set here onto `config`.
    ///
    /// Unparseable timeouts are skipped; files are validated on load, so
    /// this only happens for hand-built values.
    pub fn apply(&self, mut config: CheckConfig) -> CheckConfig {
        if let Some(t) = self.rdap_timeout.as_deref().and_then(parse_timeout_string) {
            config = config.with_rdap_timeout(t);
        }
        if let Some(t) = self.http_timeout.as_deref().and_then(parse_timeout_string) {
            config = config.with_http_timeout(t);
        }
        if let Some(t) = self.dns_timeout.as_deref().and_then(parse_timeout_string) {
            config = config.with_dns_timeout(t);
        }
        if let Some(max) = self.max_per_host {
            config = config.with_max_per_host(max);
        }
        if self.min_spacing_ms.is_some() || self.max_spacing_ms.is_some() {
            let min = self
                .min_spacing_ms
                .map(Duration::from_millis)
                .unwrap_or(config.min_spacing);
            let max = self
                .max_spacing_ms
                .map(Duration::from_millis)
                .unwrap_or(config.max_spacing);
            config = config.with_spacing(min, max);
        }
        config
    }
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to report which files were picked up
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns `FileError` when the file is missing or unreadable and
    /// `ConfigError` when it does not parse or fails validation.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, BrandScoutError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BrandScoutError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            BrandScoutError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            BrandScoutError::config(format!("Failed to parse TOML configuration: {}", e))
        })?;

        self.validate_config(&config)?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// XDG config is lowest, then `$HOME`, then the working directory.
    /// Files that fail to load are skipped with a warning.
    pub fn discover_and_load(&self) -> FileConfig {
        let mut merged_config = FileConfig::default();
        let mut loaded_files = Vec::new();

        let candidates = [
            self.get_xdg_config_path(),
            self.get_global_config_path(),
            self.get_local_config_path(),
        ];

        for path in candidates.into_iter().flatten() {
            match self.load_file(&path) {
                Ok(config) => {
                    merged_config = self.merge_configs(merged_config, config);
                    loaded_files.push(path);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping config file"),
            }
        }

        if self.verbose {
            for path in &loaded_files {
                info!(path = %path.display(), "loaded config file");
            }
        }

        merged_config
    }

    /// Local configuration in the current directory.
    fn get_local_config_path(&self) -> Option<PathBuf> {
        ["./brand-scout.toml", "./.brand-scout.toml"]
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Global configuration in the user's home directory.
    fn get_global_config_path(&self) -> Option<PathBuf> {
        let home = env::var_os("HOME")?;
        [".brand-scout.toml", "brand-scout.toml"]
            .iter()
            .map(|candidate| Path::new(&home).join(candidate))
            .find(|path| path.exists())
    }

    /// XDG configuration, following the XDG Base Directory Specification.
    fn get_xdg_config_path(&self) -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

        let path = config_dir.join("brand-scout").join("config.toml");
        path.exists().then_some(path)
    }

    /// Merge two configurations; values from `higher` win field by field.
    pub fn merge_configs(&self, lower: FileConfig, higher: FileConfig) -> FileConfig {
        FileConfig {
            defaults: match (lower.defaults, higher.defaults) {
                (Some(lo), Some(hi)) => Some(DefaultsConfig {
                    tlds: hi.tlds.or(lo.tlds),
                    platforms: hi.platforms.or(lo.platforms),
                    pretty: hi.pretty.or(lo.pretty),
                    json: hi.json.or(lo.json),
                    csv: hi.csv.or(lo.csv),
                }),
                (lo, hi) => hi.or(lo),
            },
            probe: match (lower.probe, higher.probe) {
                (Some(lo), Some(hi)) => Some(ProbeConfig {
                    rdap_timeout: hi.rdap_timeout.or(lo.rdap_timeout),
                    http_timeout: hi.http_timeout.or(lo.http_timeout),
                    dns_timeout: hi.dns_timeout.or(lo.dns_timeout),
                    max_per_host: hi.max_per_host.or(lo.max_per_host),
                    min_spacing_ms: hi.min_spacing_ms.or(lo.min_spacing_ms),
                    max_spacing_ms: hi.max_spacing_ms.or(lo.max_spacing_ms),
                }),
                (lo, hi) => hi.or(lo),
            },
        }
    }

    /// Validate a configuration for common issues.
    fn validate_config(&self, config: &FileConfig) -> Result<(), BrandScoutError> {
        if let Some(defaults) = &config.defaults {
            if defaults.json == Some(true) && defaults.csv == Some(true) {
                return Err(BrandScoutError::config(
                    "Cannot enable both 'json' and 'csv' in defaults",
                ));
            }

            for tld in defaults.tlds.iter().flatten() {
                if tld_info(tld).is_none() {
                    return Err(BrandScoutError::config(format!(
                        "Unknown TLD '{}' in defaults",
                        tld
                    )));
                }
            }

            for platform in defaults.platforms.iter().flatten() {
                if find_platform(platform).is_none() {
                    return Err(BrandScoutError::config(format!(
                        "Unknown platform '{}' in defaults",
                        platform
                    )));
                }
            }
        }

        if let Some(probe) = &config.probe {
            let timeouts = [
                ("rdap_timeout", &probe.rdap_timeout),
                ("http_timeout", &probe.http_timeout),
                ("dns_timeout", &probe.dns_timeout),
            ];
            for (field, value) in timeouts {
                if let Some(value) = value {
                    match parse_timeout_string(value) {
                        Some(d) if !d.is_zero() => {}
                        _ => {
                            return Err(BrandScoutError::config(format!(
                                "Invalid {} '{}'. Use format like '5s', '30s', '2m'",
                                field, value
                            )))
                        }
                    }
                }
            }

            if probe.max_per_host == Some(0) {
                return Err(BrandScoutError::config("max_per_host must be at least 1"));
            }

            if let (Some(min), Some(max)) = (probe.min_spacing_ms, probe.max_spacing_ms) {
                if min > max {
                    return Err(BrandScoutError::config(format!(
                        "min_spacing_ms ({}) cannot exceed max_spacing_ms ({})",
                        min, max
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Environment variable configuration that mirrors CLI options.
///
/// This represents configuration values that can be set via `BS_*`
/// environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub tlds: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub pretty: Option<bool>,
    pub json: Option<bool>,
    pub csv: Option<bool>,
    pub http_timeout: Option<Duration>,
    pub rdap_timeout: Option<Duration>,
    pub config: Option<String>,
}

impl EnvConfig {
    /// Check if output format conflicts exist (JSON and CSV both set).
    pub fn has_output_format_conflict(&self) -> bool {
        matches!((self.json, self.csv), (Some(true), Some(true)))
    }
}

/// Load configuration from the process environment.
///
/// Invalid values are logged as warnings and ignored.
pub fn load_env_config() -> EnvConfig {
    load_env_config_from(|key| env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// # Arguments
///
/// * `lookup` - Returns the value of a variable, or `None` when unset
pub fn load_env_config_from<F>(lookup: F) -> EnvConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Unknown entries are dropped; a list with nothing left counts as unset
    let list = |key: &str, known: fn(&str) -> bool| {
        let items: Vec<String> = split_list(&lookup(key)?)
            .into_iter()
            .filter(|item| {
                let ok = known(item.as_str());
                if !ok {
                    warn!(variable = key, value = %item, "unknown entry, ignored");
                }
                ok
            })
            .collect();
        (!items.is_empty()).then_some(items)
    };
    let flag = |key: &str| {
        let value = lookup(key)?;
        let parsed = parse_bool(&value);
        if parsed.is_none() {
            warn!(variable = key, value = %value, "invalid boolean, use true/false");
        }
        parsed
    };
    let timeout = |key: &str| {
        let value = lookup(key)?;
        let parsed = parse_timeout_string(&value).filter(|d| !d.is_zero());
        if parsed.is_none() {
            warn!(variable = key, value = %value, "invalid timeout, use format like '5s', '2m'");
        }
        parsed
    };

    let env_config = EnvConfig {
        tlds: list("BS_TLD", |tld| tld_info(tld).is_some()),
        platforms: list("BS_PLATFORM", |name| find_platform(name).is_some()),
        pretty: flag("BS_PRETTY"),
        json: flag("BS_JSON"),
        csv: flag("BS_CSV"),
        http_timeout: timeout("BS_HTTP_TIMEOUT"),
        rdap_timeout: timeout("BS_RDAP_TIMEOUT"),
        config: lookup("BS_CONFIG").filter(|path| !path.trim().is_empty()),
    };

    tracing::debug!(?env_config, "environment configuration");
    env_config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a timeout string like "750ms", "5s", "2m", or a bare number of
/// seconds.
pub fn parse_timeout_string(timeout_str: &str) -> Option<Duration> {
    let timeout_str = timeout_str.trim().to_lowercase();

    if let Some(ms) = timeout_str.strip_suffix("ms") {
        ms.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(s) = timeout_str.strip_suffix('s') {
        s.parse::<u64>().ok().map(Duration::from_secs)
    } else if let Some(m) = timeout_str.strip_suffix('m') {
        m.parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
    } else {
        timeout_str.parse::<u64>().ok().map(Duration::from_secs)
    }
}
