//! Scripted transports shared by the integration tests.
//!
//! Nothing here touches the network: every HTTP exchange and DNS lookup is
//! answered from a table keyed by URL or domain substring.

#![allow(dead_code)]

use brand_scout_lib::{BrandScoutError, DnsLookup, DnsOutcome, HttpFetch, HttpRequest, HttpResponse};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// How the fake transport answers a matching request.
#[derive(Debug, Clone)]
pub enum Script {
    Respond(HttpResponse),
    Fail,
    Hang,
}

impl Script {
    pub fn status(status: u16) -> Self {
        Script::Respond(HttpResponse::new(status, ""))
    }

    pub fn body(status: u16, body: &str) -> Self {
        Script::Respond(HttpResponse::new(status, body))
    }
}

/// HTTP transport answering from `(pattern, script)` rules; the first rule
/// whose pattern occurs in the URL wins.
pub struct FakeHttp {
    rules: Vec<(String, Script)>,
    default: Script,
    calls: AtomicUsize,
    per_url: Mutex<HashMap<String, usize>>,
}

impl FakeHttp {
    pub fn new(default: Script) -> Self {
        Self {
            rules: Vec::new(),
            default,
            calls: AtomicUsize::new(0),
            per_url: Mutex::new(HashMap::new()),
        }
    }

    pub fn on(mut self, pattern: &str, script: Script) -> Self {
        self.rules.push((pattern.to_string(), script));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn calls_to(&self, pattern: &str) -> usize {
        self.per_url
            .lock()
            .unwrap()
            .iter()
            .filter(|(url, _)| url.contains(pattern))
            .map(|(_, n)| *n)
            .sum()
    }

    fn script_for(&self, url: &str) -> Script {
        self.rules
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map(|(_, script)| script.clone())
            .unwrap_or_else(|| self.default.clone())
    }
}

impl HttpFetch for FakeHttp {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, BrandScoutError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .per_url
            .lock()
            .unwrap()
            .entry(request.url.clone())
            .or_insert(0) += 1;

        match self.script_for(&request.url) {
            Script::Respond(response) => Ok(response),
            Script::Fail => Err(BrandScoutError::network("connection refused")),
            Script::Hang => std::future::pending().await,
        }
    }
}

/// DNS resolver answering from domain-substring rules.
pub struct FakeDns {
    rules: Vec<(String, DnsOutcome)>,
    default: DnsOutcome,
    hang: Vec<String>,
    calls: AtomicUsize,
}

impl FakeDns {
    pub fn new(default: DnsOutcome) -> Self {
        Self {
            rules: Vec::new(),
            default,
            hang: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn on(mut self, pattern: &str, outcome: DnsOutcome) -> Self {
        self.rules.push((pattern.to_string(), outcome));
        self
    }

    pub fn hang_on(mut self, pattern: &str) -> Self {
        self.hang.push(pattern.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DnsLookup for FakeDns {
    async fn resolve(&self, domain: &str) -> DnsOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang.iter().any(|p| domain.contains(p.as_str())) {
            return std::future::pending().await;
        }
        self.rules
            .iter()
            .find(|(pattern, _)| domain.contains(pattern.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or_else(|| self.default.clone())
    }
}
