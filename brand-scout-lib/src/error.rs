//! Error handling for brand availability operations.
//!
//! Only validation and configuration errors ever reach the caller of a full
//! check. Probe-level variants (network, RDAP, DNS, timeout) are produced
//! inside the probers and folded into `unknown` results.

use std::fmt;
use std::time::Duration;

/// Main error type for brand checking operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BrandScoutError {
    /// The raw query could not be turned into a candidate name
    InvalidQuery { query: String, reason: String },

    /// Network-related errors (connection refused, TLS, body read)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// Registration-data lookup returned something we cannot interpret
    RdapError {
        domain: String,
        message: String,
        status_code: Option<u16>,
    },

    /// DNS resolver failures other than "name not found"
    DnsError { domain: String, message: String },

    /// JSON parsing errors for profile or RDAP bodies
    ParseError { message: String },

    /// Configuration errors (invalid settings, etc.)
    ConfigError { message: String },

    /// File I/O errors when reading configuration
    FileError { path: String, message: String },

    /// Timeout errors when a probe exceeds its budget
    Timeout {
        operation: String,
        duration: Duration,
    },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl BrandScoutError {
    /// Create a new invalid query error.
    pub fn invalid_query<Q: Into<String>, R: Into<String>>(query: Q, reason: R) -> Self {
        Self::InvalidQuery {
            query: query.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new RDAP error.
    pub fn rdap<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::RdapError {
            domain: domain.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a new RDAP error with HTTP status code.
    pub fn rdap_with_status<D: Into<String>, M: Into<String>>(
        domain: D,
        message: M,
        status_code: u16,
    ) -> Self {
        Self::RdapError {
            domain: domain.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new DNS error.
    pub fn dns<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::DnsError {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from validating caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidQuery { .. })
    }

    /// Whether this error is a per-probe failure that should degrade to
    /// an `unknown` result rather than fail the request.
    pub fn is_probe_failure(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::RdapError { .. }
                | Self::DnsError { .. }
                | Self::ParseError { .. }
                | Self::Timeout { .. }
        )
    }
}

impl fmt::Display for BrandScoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery { query, reason } => {
                if query.is_empty() {
                    write!(f, "Invalid query: {}", reason)
                } else {
                    write!(f, "Invalid query '{}': {}", query, reason)
                }
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::RdapError {
                domain,
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "RDAP error for '{}' (HTTP {}): {}", domain, code, message)
                } else {
                    write!(f, "RDAP error for '{}': {}", domain, message)
                }
            }
            Self::DnsError { domain, message } => {
                write!(f, "DNS error for '{}': {}", domain, message)
            }
            Self::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for BrandScoutError {}

impl From<reqwest::Error> for BrandScoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("HTTP request timed out", err.to_string())
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for BrandScoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            message: format!("JSON parsing failed: {}", err),
        }
    }
}

impl From<toml::de::Error> for BrandScoutError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML configuration: {}", err))
    }
}

impl From<std::io::Error> for BrandScoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BrandScoutError::invalid_query("", "Missing required query parameter");
        assert_eq!(err.to_string(), "Invalid query: Missing required query parameter");

        let err = BrandScoutError::rdap_with_status("acme.com", "Unexpected status", 503);
        assert_eq!(
            err.to_string(),
            "RDAP error for 'acme.com' (HTTP 503): Unexpected status"
        );

        let err = BrandScoutError::timeout("RDAP lookup", Duration::from_secs(5));
        assert!(err.to_string().contains("5s"));
    }

    #[test]
    fn test_classification_helpers() {
        assert!(BrandScoutError::invalid_query("x", "bad").is_validation());
        assert!(!BrandScoutError::invalid_query("x", "bad").is_probe_failure());
        assert!(BrandScoutError::network("reset").is_probe_failure());
        assert!(BrandScoutError::dns("a.com", "SERVFAIL").is_probe_failure());
        assert!(!BrandScoutError::config("bad").is_probe_failure());
    }
}
