use crate::dispatch::CacheControl;
use http::{HeaderMap, HeaderName, HeaderValue, header};

pub(crate) const ALLOWED_METHODS: &str = "GET, HEAD";

#[derive(Debug, Default)]
pub(crate) struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    /// Inserts (or removes) a header from the header map.
    ///
    /// If the value cannot be represented as a `HeaderValue` or is empty,
    /// the header is removed instead.
    pub(crate) fn insert(&mut self, header_name: HeaderName, value: &str) {
        let header_value = HeaderValue::from_str(value).unwrap_or(HeaderValue::from_static(""));
        if header_value.is_empty() {
            self.headers.remove(header_name);
        } else {
            self.headers.insert(header_name, header_value);
        }
    }

    pub(crate) fn content_type(&mut self, value: &str) {
        self.insert(header::CONTENT_TYPE, value);
    }

    pub(crate) fn content_length(&mut self, len: usize) {
        self.insert(header::CONTENT_LENGTH, &len.to_string());
    }

    pub(crate) fn cache_control(&mut self, value: &CacheControl) {
        self.insert(header::CACHE_CONTROL, value.as_str());
    }

    pub(crate) fn etag(&mut self, value: &str) {
        self.insert(header::ETAG, value);
    }

    pub(crate) fn last_modified(&mut self, value: &str) {
        self.insert(header::LAST_MODIFIED, value);
    }

    pub(crate) fn pragma(&mut self, value: &str) {
        self.insert(header::PRAGMA, value);
    }

    pub(crate) fn expires(&mut self, value: &str) {
        self.insert(header::EXPIRES, value);
    }

    pub(crate) fn allow(&mut self) {
        self.insert(header::ALLOW, ALLOWED_METHODS);
    }

    pub(crate) fn build(self) -> HeaderMap {
        self.headers
    }
}
