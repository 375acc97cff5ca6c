//! End-to-end tests of `BrandChecker` over scripted transports.
//!
//! Time is paused in every async test, so timeouts and TTLs elapse
//! instantly once all probes are idle.

mod common;

use brand_scout_lib::{
    find_platform, get_all_tlds, rdap_url, Availability, BrandChecker, CheckConfig, CheckRequest,
    DnsOutcome, ProbeSource, FAILURE_CONFIDENCE, PLATFORMS,
};
use common::{FakeDns, FakeHttp, Script};
use std::time::Duration;

/// Body every platform classifier reads as "no such profile".
const NOT_FOUND_JSON: &str = r#"{"message":"Not Found","error":404}"#;

fn test_config() -> CheckConfig {
    CheckConfig::default().with_spacing(Duration::ZERO, Duration::ZERO)
}

fn checker(http: FakeHttp, dns: FakeDns) -> BrandChecker<FakeHttp, FakeDns> {
    BrandChecker::with_transports(test_config(), http, dns)
}

fn probeable_platforms() -> Vec<String> {
    PLATFORMS
        .iter()
        .filter(|p| p.is_probeable())
        .map(|p| p.name.to_string())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_all_domains_taken_all_handles_free() {
    let http = FakeHttp::new(Script::body(404, NOT_FOUND_JSON)).on("/domain/", Script::body(200, "{}"));
    let checker = checker(http, FakeDns::new(DnsOutcome::NotFound));

    let request = CheckRequest::new("getflowhub").with_platforms(probeable_platforms());
    let report = checker.check(&request).await.unwrap();

    assert_eq!(report.name, "getflowhub");
    assert_eq!(report.domains.len(), 7);
    assert!(report
        .domains
        .iter()
        .all(|d| d.status == Availability::Taken && d.source == ProbeSource::Rdap));
    assert_eq!(report.usernames.len(), 11);
    assert!(report
        .usernames
        .iter()
        .all(|u| u.status == Availability::Available));
    assert_eq!(report.score, 70);
    assert_eq!(checker.dns().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_everything_unknown() {
    let http = FakeHttp::new(Script::Fail);
    let dns = FakeDns::new(DnsOutcome::Failed("SERVFAIL".to_string()));
    let checker = checker(http, dns);

    let report = checker.check_query("zx9").await.unwrap();

    assert!(report.domains.iter().all(|d| d.status == Availability::Unknown));
    assert!(report
        .domains
        .iter()
        .all(|d| d.source == ProbeSource::Fallback));
    assert!(report
        .usernames
        .iter()
        .all(|u| u.status == Availability::Unknown));
    // readability 10 (digit, no vowels) + length 6
    assert_eq!(report.score, 16);
}

#[tokio::test(start_paused = true)]
async fn test_body_marker_means_available() {
    let behance = find_platform("Behance").unwrap();
    let http = FakeHttp::new(Script::status(500)).on(
        &behance.probe_url_for("acme"),
        Script::body(200, "<html><h1>Page Not Found</h1></html>"),
    );
    let checker = checker(http, FakeDns::new(DnsOutcome::NotFound));

    let result = checker.check_username("Behance", "acme").await.unwrap();
    assert_eq!(result.status, Availability::Available);
    assert_eq!(result.source, ProbeSource::Http);
    assert!(result.confidence >= 0.8);
}

#[tokio::test(start_paused = true)]
async fn test_instagram_is_never_fetched() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));

    let result = checker.check_username("instagram", "acme").await.unwrap();
    assert_eq!(result.status, Availability::Unknown);
    assert_eq!(result.source, ProbeSource::Skipped);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(checker.http().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_platform_is_rejected() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));

    let err = checker.check_username("MySpace", "acme").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(checker.http().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_hanging_tld_does_not_block_the_rest() {
    let http = FakeHttp::new(Script::status(404)).on("acme.ai", Script::Hang);
    let dns = FakeDns::new(DnsOutcome::NotFound).hang_on("acme.ai");
    let checker = checker(http, dns);

    let domains = checker
        .check(&CheckRequest::new("acme").with_platforms(["GitHub"]))
        .await
        .unwrap()
        .domains;

    assert_eq!(domains.len(), 7);
    for entry in &domains {
        if entry.domain == "acme.ai" {
            assert_eq!(entry.status, Availability::Unknown);
            assert_eq!(entry.source, ProbeSource::Fallback);
        } else {
            assert_eq!(entry.status, Availability::Available, "{}", entry.domain);
            assert_eq!(entry.source, ProbeSource::Rdap);
        }
    }

    let ai = checker.check_domain("acme", "ai").await;
    assert_eq!(ai.confidence, FAILURE_CONFIDENCE);
}

#[tokio::test(start_paused = true)]
async fn test_inconclusive_rdap_falls_back_to_dns() {
    let http = FakeHttp::new(Script::status(404)).on(&rdap_url("acme", "io"), Script::status(503));
    let dns = FakeDns::new(DnsOutcome::NotFound).on("acme.io", DnsOutcome::Resolved);
    let checker = checker(http, dns);

    let result = checker.check_domain("acme", ".io").await;
    assert_eq!(result.status, Availability::Taken);
    assert_eq!(result.source, ProbeSource::Dns);
    assert_eq!(checker.dns().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_repeat_query_is_served_from_cache() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));

    let first = checker.check_query("acme").await.unwrap();
    let calls = checker.http().calls();
    assert!(calls > 0);

    let second = checker.check_query("ACME").await.unwrap();
    assert_eq!(checker.http().calls(), calls);
    assert_eq!(first.domains, second.domains);
    assert_eq!(first.usernames, second.usernames);
    assert_eq!(first.score, second.score);
}

#[tokio::test(start_paused = true)]
async fn test_domain_results_expire_before_username_results() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));

    checker.check_query("acme").await.unwrap();
    let rdap_calls = checker.http().calls_to("/domain/");
    let total_calls = checker.http().calls();
    assert_eq!(rdap_calls, 7);

    // past the 5 minute domain TTL, inside the 10 minute username TTL
    tokio::time::advance(Duration::from_secs(6 * 60)).await;
    checker.check_query("acme").await.unwrap();

    assert_eq!(checker.http().calls_to("/domain/"), 14);
    assert_eq!(checker.http().calls(), total_calls + 7);
}

#[tokio::test(start_paused = true)]
async fn test_tld_filter() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));

    let report = checker
        .check(&CheckRequest::new("acme").with_tlds(["com", ".io"]))
        .await
        .unwrap();

    let names: Vec<&str> = report.domains.iter().map(|d| d.domain.as_str()).collect();
    assert_eq!(names, vec!["acme.com", "acme.io"]);
    assert_eq!(checker.http().calls_to("/domain/"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_queries_probe_nothing() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));

    let too_long = "a".repeat(64);
    for query in ["", "   ", too_long.as_str(), "!!!"] {
        let err = checker.check_query(query).await.unwrap_err();
        assert!(err.is_validation(), "{:?} should be rejected", query);
    }
    assert_eq!(checker.http().calls(), 0);
    assert_eq!(checker.dns().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_hyphen_only_label_fetches_nothing() {
    // Every page answers 200, so any request that slipped through would read as taken
    let checker = checker(FakeHttp::new(Script::status(200)), FakeDns::new(DnsOutcome::Resolved));

    let request = CheckRequest::new("---.io").with_platforms(["GitHub"]);
    let err = checker.check(&request).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(checker.http().calls(), 0);
    assert_eq!(checker.dns().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_empty_handle_and_label_are_not_fetched() {
    let checker = checker(FakeHttp::new(Script::status(200)), FakeDns::new(DnsOutcome::Resolved));

    let handle = checker.check_username("GitHub", "---").await.unwrap();
    assert_eq!(handle.status, Availability::Unknown);
    assert_eq!(handle.source, ProbeSource::Skipped);

    let domain = checker.check_domain("---", "com").await;
    assert_eq!(domain.status, Availability::Unknown);
    assert_eq!(domain.confidence, 0.0);

    assert_eq!(checker.http().calls(), 0);
    assert_eq!(checker.dns().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_report_order_follows_tables() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));
    let report = checker.check_query("acme").await.unwrap();

    let tlds: Vec<&str> = report.domains.iter().map(|d| d.tld.as_str()).collect();
    assert_eq!(tlds, get_all_tlds());

    let platforms: Vec<&str> = report.usernames.iter().map(|u| u.platform.as_str()).collect();
    let expected: Vec<&str> = PLATFORMS.iter().map(|p| p.name).collect();
    assert_eq!(platforms, expected);
}

#[tokio::test(start_paused = true)]
async fn test_domain_query_keeps_label() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));
    let report = checker
        .check(&CheckRequest::new("Acme.io").with_tlds(["com"]))
        .await
        .unwrap();

    assert_eq!(report.name, "acme");
    assert_eq!(report.query, "Acme.io");
    assert_eq!(report.domains[0].domain, "acme.com");
}

#[tokio::test(start_paused = true)]
async fn test_report_json_shape() {
    let checker = checker(FakeHttp::new(Script::status(404)), FakeDns::new(DnsOutcome::NotFound));
    let report = checker
        .check(&CheckRequest::new("getflowhub").with_tlds(["com"]))
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    for key in [
        "query",
        "name",
        "interpretation",
        "score",
        "descriptionForAi",
        "domains",
        "usernames",
        "suggestions",
        "analysis",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["domains"][0]["status"], "available");
    assert_eq!(json["domains"][0]["source"], "rdap");
    assert!(json["usernames"][0].get("profileUrl").is_some());
    assert!(json["analysis"].get("nameStrength").is_some());
    assert!(report.description_for_ai.starts_with("Brand \"getflowhub\": "));
}
