//! Platform descriptors and response classification.
//!
//! Each platform is plain data: where to look, which method to use, and
//! which [`Classifier`] strategy interprets the response. Adding a platform
//! means adding a row, not writing code.

use crate::concurrent::Classification;
use crate::protocols::http::{HttpResponse, ProbeMethod};
use crate::types::{Availability, ProbeSource};
use serde_json::Value;

/// Placeholder replaced by the handle in URL templates.
const HANDLE: &str = "{}";

const AVAILABLE_ON_NOT_FOUND: f64 = 0.85;
const TAKEN_ON_SUCCESS: f64 = 0.9;
const UNDECIDED: f64 = 0.3;

const MARKER_NOT_FOUND_STATUS: f64 = 0.9;
const MARKER_AVAILABLE: f64 = 0.85;
const MARKER_TAKEN: f64 = 0.9;

const JSON_TAKEN: f64 = 0.95;
const JSON_AVAILABLE: f64 = 0.9;

/// How a platform's response is turned into a status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classifier {
    /// Status code only: listed codes mean available, 2xx/301/302 taken.
    StatusCode { not_found_codes: &'static [u16] },

    /// The platform answers 200 for missing profiles; decide from body text.
    ///
    /// 404 is still available. On 2xx an available marker wins over a taken
    /// marker. With no marker, `unmatched_is_taken` decides between taken
    /// and a low-confidence unknown.
    BodyMarker {
        available_markers: &'static [&'static str],
        taken_markers: &'static [&'static str],
        unmatched_is_taken: bool,
    },

    /// JSON profile endpoint: `data.name` means taken, a 404 error object
    /// means available.
    JsonProfile,

    /// No reliable signal exists; never probed.
    Unprobeable,
}

/// A probed social/content platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub name: &'static str,
    /// URL requested by the probe, `{}` is the handle
    pub probe_url: &'static str,
    /// URL shown to users, `{}` is the handle
    pub profile_url: &'static str,
    pub method: ProbeMethod,
    pub classifier: Classifier,
}

const DEFAULT_STATUS: Classifier = Classifier::StatusCode {
    not_found_codes: &[404],
};

/// Every supported platform, in report order.
pub static PLATFORMS: [Platform; 12] = [
    Platform {
        name: "GitHub",
        probe_url: "https://github.com/{}",
        profile_url: "https://github.com/{}",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "Reddit",
        probe_url: "https://www.reddit.com/user/{}/about.json",
        profile_url: "https://www.reddit.com/user/{}",
        method: ProbeMethod::Get,
        classifier: Classifier::JsonProfile,
    },
    Platform {
        name: "Pinterest",
        probe_url: "https://www.pinterest.com/{}/",
        profile_url: "https://www.pinterest.com/{}/",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "Twitch",
        probe_url: "https://www.twitch.tv/{}",
        profile_url: "https://www.twitch.tv/{}",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "Medium",
        probe_url: "https://medium.com/@{}",
        profile_url: "https://medium.com/@{}",
        method: ProbeMethod::Get,
        classifier: Classifier::BodyMarker {
            available_markers: &["PAGE_NOT_FOUND"],
            taken_markers: &[],
            unmatched_is_taken: true,
        },
    },
    Platform {
        name: "Vimeo",
        probe_url: "https://vimeo.com/{}",
        profile_url: "https://vimeo.com/{}",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "YouTube",
        probe_url: "https://www.youtube.com/@{}",
        profile_url: "https://www.youtube.com/@{}",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "DEV",
        probe_url: "https://dev.to/{}",
        profile_url: "https://dev.to/{}",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "Keybase",
        probe_url: "https://keybase.io/{}",
        profile_url: "https://keybase.io/{}",
        method: ProbeMethod::Head,
        classifier: DEFAULT_STATUS,
    },
    Platform {
        name: "Behance",
        probe_url: "https://www.behance.net/{}",
        profile_url: "https://www.behance.net/{}",
        method: ProbeMethod::Get,
        classifier: Classifier::BodyMarker {
            available_markers: &["Page Not Found", "Oops! We can\u{2019}t find that page."],
            taken_markers: &["\"owner\":{\"id\""],
            unmatched_is_taken: false,
        },
    },
    Platform {
        name: "TikTok",
        probe_url: "https://www.tiktok.com/@{}",
        profile_url: "https://www.tiktok.com/@{}",
        method: ProbeMethod::Get,
        classifier: Classifier::BodyMarker {
            available_markers: &["Couldn't find this account", "\"statusCode\":10221"],
            taken_markers: &["\"uniqueId\":\""],
            unmatched_is_taken: false,
        },
    },
    // Serves a login wall to anonymous clients whether or not the profile exists
    Platform {
        name: "Instagram",
        probe_url: "https://www.instagram.com/{}/",
        profile_url: "https://www.instagram.com/{}/",
        method: ProbeMethod::Get,
        classifier: Classifier::Unprobeable,
    },
];

impl Platform {
    /// URL the probe requests for `handle`.
    pub fn probe_url_for(&self, handle: &str) -> String {
        self.probe_url.replace(HANDLE, handle)
    }

    /// URL reported to users for `handle`.
    pub fn profile_url_for(&self, handle: &str) -> String {
        self.profile_url.replace(HANDLE, handle)
    }

    pub fn is_probeable(&self) -> bool {
        self.classifier != Classifier::Unprobeable
    }
}

impl Classifier {
    /// Classify a completed HTTP exchange.
    pub fn classify(&self, response: &HttpResponse) -> Classification {
        let (status, confidence) = match self {
            Classifier::StatusCode { not_found_codes } => {
                if not_found_codes.contains(&response.status) {
                    (Availability::Available, AVAILABLE_ON_NOT_FOUND)
                } else if response.is_success() || matches!(response.status, 301 | 302) {
                    (Availability::Taken, TAKEN_ON_SUCCESS)
                } else {
                    (Availability::Unknown, UNDECIDED)
                }
            }
            Classifier::BodyMarker {
                available_markers,
                taken_markers,
                unmatched_is_taken,
            } => classify_body(response, available_markers, taken_markers, *unmatched_is_taken),
            Classifier::JsonProfile => classify_json_profile(&response.body),
            Classifier::Unprobeable => (Availability::Unknown, 0.0),
        };
        Classification::new(status, ProbeSource::Http, confidence)
    }
}

fn classify_body(
    response: &HttpResponse,
    available_markers: &[&str],
    taken_markers: &[&str],
    unmatched_is_taken: bool,
) -> (Availability, f64) {
    if response.status == 404 {
        return (Availability::Available, MARKER_NOT_FOUND_STATUS);
    }
    if !response.is_success() {
        return (Availability::Unknown, UNDECIDED);
    }

    let body = response.body.as_str();
    if available_markers.iter().any(|m| body.contains(m)) {
        (Availability::Available, MARKER_AVAILABLE)
    } else if taken_markers.iter().any(|m| body.contains(m)) || unmatched_is_taken {
        (Availability::Taken, MARKER_TAKEN)
    } else {
        (Availability::Unknown, UNDECIDED)
    }
}

fn classify_json_profile(body: &str) -> (Availability, f64) {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return (Availability::Unknown, UNDECIDED);
    };

    let has_name = json
        .pointer("/data/name")
        .map(is_truthy)
        .unwrap_or(false);
    if has_name {
        return (Availability::Taken, JSON_TAKEN);
    }

    let error_404 = json.get("error").and_then(Value::as_i64) == Some(404);
    let not_found = json.get("message").and_then(Value::as_str) == Some("Not Found");
    if error_404 || not_found {
        return (Availability::Available, JSON_AVAILABLE);
    }

    (Availability::Unknown, UNDECIDED)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Find a platform by name, case-insensitively.
pub fn find_platform(name: &str) -> Option<&'static Platform> {
    let name = name.trim();
    PLATFORMS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// All platform names in report order.
pub fn get_all_platforms() -> Vec<&'static str> {
    PLATFORMS.iter().map(|p| p.name).collect()
}

/// Apply an optional platform filter, keeping table order.
///
/// Matching is case-insensitive; unknown names are ignored. An empty
/// filter selects everything.
pub fn select_platforms(filter: Option<&[String]>) -> Vec<&'static Platform> {
    match filter {
        None => PLATFORMS.iter().collect(),
        Some(wanted) if wanted.is_empty() => PLATFORMS.iter().collect(),
        Some(wanted) => PLATFORMS
            .iter()
            .filter(|p| wanted.iter().any(|w| p.name.eq_ignore_ascii_case(w.trim())))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(name: &str) -> &'static Platform {
        find_platform(name).unwrap()
    }

    #[test]
    fn test_default_classifier() {
        let c = DEFAULT_STATUS;
        let r = c.classify(&HttpResponse::new(404, ""));
        assert_eq!((r.status, r.confidence), (Availability::Available, 0.85));

        for code in [200, 204, 301, 302] {
            let r = c.classify(&HttpResponse::new(code, ""));
            assert_eq!((r.status, r.confidence), (Availability::Taken, 0.9));
        }

        for code in [403, 429, 500, 307] {
            let r = c.classify(&HttpResponse::new(code, ""));
            assert_eq!((r.status, r.confidence), (Availability::Unknown, 0.3));
        }
        assert_eq!(r.source, ProbeSource::Http);
    }

    #[test]
    fn test_page_not_found_marker_on_200_is_available() {
        let behance = platform("behance");
        let r = behance
            .classifier
            .classify(&HttpResponse::new(200, "<title>Page Not Found | Behance</title>"));
        assert_eq!(r.status, Availability::Available);
        assert!((0.8..=0.9).contains(&r.confidence));
    }

    #[test]
    fn test_unmatched_marker_body_is_low_confidence_unknown() {
        let tiktok = platform("TikTok");
        let r = tiktok.classifier.classify(&HttpResponse::new(200, "<html>generic</html>"));
        assert_eq!((r.status, r.confidence), (Availability::Unknown, 0.3));

        let r = tiktok
            .classifier
            .classify(&HttpResponse::new(200, r#"{"user":{"uniqueId":"acme"}}"#));
        assert_eq!(r.status, Availability::Taken);
    }

    #[test]
    fn test_medium_body_rules() {
        let medium = platform("medium");
        let r = medium.classifier.classify(&HttpResponse::new(404, ""));
        assert_eq!((r.status, r.confidence), (Availability::Available, 0.9));

        let r = medium
            .classifier
            .classify(&HttpResponse::new(200, "window.__APOLLO_STATE__ PAGE_NOT_FOUND"));
        assert_eq!((r.status, r.confidence), (Availability::Available, 0.85));

        let r = medium.classifier.classify(&HttpResponse::new(200, "<h1>Acme</h1>"));
        assert_eq!((r.status, r.confidence), (Availability::Taken, 0.9));

        let r = medium.classifier.classify(&HttpResponse::new(503, ""));
        assert_eq!((r.status, r.confidence), (Availability::Unknown, 0.3));
    }

    #[test]
    fn test_reddit_json_profile() {
        let c = Classifier::JsonProfile;

        let r = c.classify(&HttpResponse::new(200, r#"{"kind":"t2","data":{"name":"acme"}}"#));
        assert_eq!((r.status, r.confidence), (Availability::Taken, 0.95));

        let r = c.classify(&HttpResponse::new(404, r#"{"message":"Not Found","error":404}"#));
        assert_eq!((r.status, r.confidence), (Availability::Available, 0.9));

        let r = c.classify(&HttpResponse::new(200, r#"{"data":{"name":""}}"#));
        assert_eq!(r.status, Availability::Unknown);

        let r = c.classify(&HttpResponse::new(429, "<html>Too Many Requests</html>"));
        assert_eq!((r.status, r.confidence), (Availability::Unknown, 0.3));
    }

    #[test]
    fn test_exactly_one_unprobeable_platform() {
        let unprobeable: Vec<_> = PLATFORMS.iter().filter(|p| !p.is_probeable()).collect();
        assert_eq!(unprobeable.len(), 1);
        let r = unprobeable[0].classifier.classify(&HttpResponse::new(200, ""));
        assert_eq!((r.status, r.confidence), (Availability::Unknown, 0.0));
    }

    #[test]
    fn test_urls() {
        let reddit = platform("REDDIT");
        assert_eq!(
            reddit.probe_url_for("acme"),
            "https://www.reddit.com/user/acme/about.json"
        );
        assert_eq!(reddit.profile_url_for("acme"), "https://www.reddit.com/user/acme");
        assert_eq!(platform("medium").profile_url_for("acme"), "https://medium.com/@acme");
    }

    #[test]
    fn test_select_platforms() {
        let filter = vec!["twitch".to_string(), " GITHUB ".to_string(), "myspace".to_string()];
        let names: Vec<_> = select_platforms(Some(filter.as_slice()))
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["GitHub", "Twitch"]);
        assert_eq!(select_platforms(None).len(), PLATFORMS.len());
    }

    #[test]
    fn test_platform_names_unique() {
        let names = get_all_platforms();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b));
            }
        }
    }
}
