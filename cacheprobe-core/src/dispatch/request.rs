use crate::ctx::RequestId;
use crate::dispatch::DispatchError;
use http::{Method, Uri};
use percent_encoding::percent_decode_str;

/// Framework-independent view of an incoming request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    request_id: RequestId,
    method: Method,
    path: String,
    raw_query: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::default(),
            method,
            path: path.into(),
            raw_query: None,
        }
    }

    pub fn from_uri(method: Method, uri: &Uri) -> Self {
        Self {
            request_id: RequestId::default(),
            method,
            path: uri.path().to_owned(),
            raw_query: uri.query().map(str::to_owned),
        }
    }

    pub fn with_query(mut self, raw_query: impl Into<String>) -> Self {
        self.raw_query = Some(raw_query.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decode the query as `application/x-www-form-urlencoded`.
    pub fn query(&self) -> Result<QueryParams, DispatchError> {
        let Some(raw) = self.raw_query.as_deref() else {
            return Ok(QueryParams::default());
        };

        let mut pairs = Vec::new();
        for part in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            pairs.push((decode_component(key)?, decode_component(value)?));
        }

        Ok(QueryParams { pairs })
    }
}

fn decode_component(raw: &str) -> Result<String, DispatchError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| DispatchError::MalformedQuery)
}

/// Decoded query pairs in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// First value for `name`. An empty value counts as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}
