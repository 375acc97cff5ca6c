//! Network transports and the TLD registry table.
//!
//! `http` and `dns` define the transport seams the probers are generic
//! over, with their production implementations. `registry` maps each
//! supported TLD to its RDAP endpoint and scoring weight.

/// HTTP transport (profile probes and RDAP)
pub mod http;

/// DNS fallback resolver
pub mod dns;

/// Supported TLDs, weights and RDAP endpoints
pub mod registry;
