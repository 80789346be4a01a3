use crate::dispatch::DispatchError;
use crate::dispatch::headers::HeaderBuilder;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Serialize;

/// Framework-independent response: status, headers and body.
///
/// `Content-Length` is always present and matches the body.
pub struct ResponseDescriptor {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ResponseDescriptor {
    pub(crate) fn new(status: StatusCode, mut headers: HeaderBuilder, body: Bytes) -> Self {
        headers.content_length(body.len());
        Self {
            status,
            headers: headers.build(),
            body,
        }
    }

    pub(crate) fn png(headers: HeaderBuilder, png: Bytes) -> Self {
        Self::new(StatusCode::OK, headers, png)
    }

    pub(crate) fn html(markup: String) -> Self {
        let mut headers = HeaderBuilder::default();
        headers.content_type("text/html; charset=utf-8");
        Self::new(StatusCode::OK, headers, Bytes::from(markup))
    }

    pub(crate) fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, DispatchError> {
        let body = serde_json::to_vec(value)?;
        let mut headers = HeaderBuilder::default();
        headers.content_type("application/json");
        Ok(Self::new(status, headers, Bytes::from(body)))
    }

    /// Error response with a small JSON body naming the problem.
    pub fn from_error(err: &DispatchError) -> Self {
        let status = err.status();
        let body = serde_json::json!({ "error": err.to_string() }).to_string();

        let mut headers = HeaderBuilder::default();
        headers.content_type("application/json");
        if let DispatchError::MethodNotAllowed { .. } = err {
            headers.allow();
        }

        Self::new(status, headers, Bytes::from(body))
    }

    pub fn header(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
