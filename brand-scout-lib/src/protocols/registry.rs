//! TLD table: probe order, scoring weights and RDAP endpoints.
//!
//! The TLD list and weights are part of the published score formula and
//! must not be re-tuned.

use crate::utils::normalize_tld;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// A probed top-level domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TldInfo {
    /// TLD with leading dot
    pub tld: &'static str,
    /// Weight in the domain-quality score component
    pub weight: f64,
    /// RDAP base URL; the full domain is appended
    pub rdap_endpoint: &'static str,
}

/// Redirecting RDAP service for TLDs without a reliable direct endpoint.
pub const FALLBACK_RDAP_ENDPOINT: &str = "https://rdap.org/domain/";

/// Every probed TLD, in report order.
pub static SUPPORTED_TLDS: [TldInfo; 7] = [
    TldInfo {
        tld: ".com",
        weight: 3.0,
        rdap_endpoint: "https://rdap.verisign.com/com/v1/domain/",
    },
    TldInfo {
        tld: ".net",
        weight: 2.0,
        rdap_endpoint: "https://rdap.verisign.com/net/v1/domain/",
    },
    TldInfo {
        tld: ".org",
        weight: 2.0,
        rdap_endpoint: "https://rdap.publicinterestregistry.org/rdap/domain/",
    },
    // .co has no working direct endpoint
    TldInfo {
        tld: ".co",
        weight: 1.5,
        rdap_endpoint: FALLBACK_RDAP_ENDPOINT,
    },
    TldInfo {
        tld: ".io",
        weight: 1.5,
        rdap_endpoint: "https://rdap.identitydigital.services/rdap/domain/",
    },
    TldInfo {
        tld: ".ai",
        weight: 1.0,
        rdap_endpoint: "https://rdap.identitydigital.services/rdap/domain/",
    },
    TldInfo {
        tld: ".app",
        weight: 1.0,
        rdap_endpoint: "https://pubapi.registry.google/rdap/domain/",
    },
];

/// Weight assumed for a TLD outside the table.
const DEFAULT_WEIGHT: f64 = 1.0;

lazy_static! {
    static ref TLD_INDEX: HashMap<&'static str, &'static TldInfo> =
        SUPPORTED_TLDS.iter().map(|info| (info.tld, info)).collect();
}

/// Look up a TLD, with or without its leading dot.
pub fn tld_info(tld: &str) -> Option<&'static TldInfo> {
    TLD_INDEX.get(normalize_tld(tld).as_str()).copied()
}

/// Scoring weight of a TLD; unlisted TLDs weigh 1.
pub fn tld_weight(tld: &str) -> f64 {
    tld_info(tld).map(|info| info.weight).unwrap_or(DEFAULT_WEIGHT)
}

/// Sum of all configured TLD weights (the domain component's denominator).
pub fn total_tld_weight() -> f64 {
    SUPPORTED_TLDS.iter().map(|info| info.weight).sum()
}

/// RDAP URL for a full domain such as `acme.io`.
pub fn rdap_url(name: &str, tld: &str) -> String {
    let tld = normalize_tld(tld);
    let endpoint = tld_info(&tld)
        .map(|info| info.rdap_endpoint)
        .unwrap_or(FALLBACK_RDAP_ENDPOINT);
    format!("{}{}{}", endpoint, name, tld)
}

/// All supported TLDs, with dots, in report order.
pub fn get_all_tlds() -> Vec<&'static str> {
    SUPPORTED_TLDS.iter().map(|info| info.tld).collect()
}

/// Apply an optional TLD filter, keeping table order.
///
/// Filter values are normalized to a leading dot; unknown entries are
/// ignored, so a filter of only unknown TLDs selects nothing. An empty
/// filter selects everything.
pub fn select_tlds(filter: Option<&[String]>) -> Vec<&'static TldInfo> {
    match filter {
        None => SUPPORTED_TLDS.iter().collect(),
        Some(wanted) if wanted.is_empty() => SUPPORTED_TLDS.iter().collect(),
        Some(wanted) => {
            let wanted: Vec<String> = wanted.iter().map(|t| normalize_tld(t)).collect();
            SUPPORTED_TLDS
                .iter()
                .filter(|info| wanted.iter().any(|w| w == info.tld))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        assert_eq!(
            get_all_tlds(),
            vec![".com", ".net", ".org", ".co", ".io", ".ai", ".app"]
        );
    }

    #[test]
    fn test_weights() {
        assert_eq!(total_tld_weight(), 12.0);
        assert_eq!(tld_weight("com"), 3.0);
        assert_eq!(tld_weight(".io"), 1.5);
        assert_eq!(tld_weight(".xyz"), 1.0);
    }

    #[test]
    fn test_rdap_urls() {
        assert_eq!(
            rdap_url("acme", ".com"),
            "https://rdap.verisign.com/com/v1/domain/acme.com"
        );
        assert_eq!(rdap_url("acme", "co"), "https://rdap.org/domain/acme.co");
        assert_eq!(rdap_url("acme", ".xyz"), "https://rdap.org/domain/acme.xyz");
    }

    #[test]
    fn test_all_endpoints_are_https() {
        for info in SUPPORTED_TLDS.iter() {
            assert!(info.rdap_endpoint.starts_with("https://"));
            assert!(info.rdap_endpoint.ends_with('/'));
        }
    }

    #[test]
    fn test_select_tlds_keeps_table_order() {
        let filter = vec!["io".to_string(), ".COM".to_string(), "dev".to_string()];
        let selected: Vec<_> = select_tlds(Some(filter.as_slice())).iter().map(|i| i.tld).collect();
        assert_eq!(selected, vec![".com", ".io"]);

        assert_eq!(select_tlds(None).len(), 7);
        let empty: Vec<String> = Vec::new();
        assert_eq!(select_tlds(Some(empty.as_slice())).len(), 7);

        let unknown = vec!["xyz".to_string()];
        assert!(select_tlds(Some(unknown.as_slice())).is_empty());
    }
}
