use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Body of `GET /status`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: &'static str,
    pub total_requests: u64,
    pub server_time: String,
    pub endpoints: EndpointDocs,
    pub usage: UsageDocs,
}

#[derive(Debug, Serialize)]
pub struct EndpointDocs {
    #[serde(rename = "/cache-test")]
    cache_test: &'static str,
    #[serde(rename = "/cache-test/no-cache")]
    no_cache: &'static str,
    #[serde(rename = "/cache-test/max-age/:seconds")]
    max_age: &'static str,
    #[serde(rename = "/status")]
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsageDocs {
    default: &'static str,
    #[serde(rename = "disable caching")]
    no_cache: &'static str,
    #[serde(rename = "custom max-age")]
    max_age: &'static str,
    #[serde(rename = "query parameters")]
    query: &'static str,
}

impl StatusReport {
    pub fn new(total_requests: u64, now: DateTime<Utc>) -> Self {
        Self {
            status: "running",
            total_requests,
            server_time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            endpoints: EndpointDocs {
                cache_test: "default cache test (cached for one year)",
                no_cache: "caching disabled",
                max_age: "custom max-age in seconds",
                status: "server status",
            },
            usage: UsageDocs {
                default: "GET /cache-test",
                no_cache: "GET /cache-test/no-cache",
                max_age: "GET /cache-test/max-age/3600 (one hour)",
                query: "GET /cache-test?maxAge=86400&cacheControl=public,max-age=86400",
            },
        }
    }
}
