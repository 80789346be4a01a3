use crate::dispatch::CacheControl;
use crate::dispatch::headers::HeaderBuilder;
use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Cache-related headers attached to one image response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDirectives {
    pub cache_control: CacheControl,
    pub etag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub pragma: Option<&'static str>,
    pub expires: Option<&'static str>,
}

impl CacheDirectives {
    /// Cacheable response carrying validators: `ETag: "cache-test-<seed>"`
    /// and `Last-Modified` set to `now`.
    pub fn with_validators(cache_control: CacheControl, seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            cache_control,
            etag: Some(format!("\"cache-test-{seed}\"")),
            last_modified: Some(now),
            pragma: None,
            expires: None,
        }
    }

    /// Forbid storage everywhere, including HTTP/1.0 caches.
    pub fn no_store() -> Self {
        Self {
            cache_control: CacheControl::no_store(),
            etag: None,
            last_modified: None,
            pragma: Some("no-cache"),
            expires: Some("0"),
        }
    }

    pub fn max_age(seconds: u64) -> Self {
        Self {
            cache_control: CacheControl::public_max_age(seconds),
            etag: None,
            last_modified: None,
            pragma: None,
            expires: None,
        }
    }

    pub(crate) fn apply(&self, headers: &mut HeaderBuilder) {
        headers.cache_control(&self.cache_control);

        if let Some(etag) = &self.etag {
            headers.etag(etag);
        }
        if let Some(modified) = self.last_modified {
            headers.last_modified(&httpdate::fmt_http_date(SystemTime::from(modified)));
        }
        if let Some(pragma) = self.pragma {
            headers.pragma(pragma);
        }
        if let Some(expires) = self.expires {
            headers.expires(expires);
        }
    }
}
