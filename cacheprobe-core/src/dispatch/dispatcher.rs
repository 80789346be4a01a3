use crate::counter::RequestCounter;
use crate::dispatch::cache_control::parse_delta_seconds;
use crate::dispatch::headers::HeaderBuilder;
use crate::dispatch::index_page::render_index;
use crate::dispatch::{
    CacheControl, CacheDirectives, DEFAULT_MAX_AGE, DispatchError, Endpoint, QueryParams,
    RequestDescriptor, ResponseDescriptor, StatusReport,
};
use crate::synth::ImageGenerator;
use chrono::{DateTime, Utc};
use http::{Method, StatusCode};
use percent_encoding::percent_decode_str;
use std::sync::Arc;

/// Maps requests to cache directives and generated images.
///
/// Parameters are validated before the counter moves, so a rejected request
/// never consumes a seed.
pub struct Dispatcher {
    counter: Arc<RequestCounter>,
    generator: ImageGenerator,
}

impl Dispatcher {
    pub fn new(counter: Arc<RequestCounter>, generator: ImageGenerator) -> Self {
        Self { counter, generator }
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.counter
    }

    /// Dispatch a request, turning any failure into an error response.
    pub fn dispatch(&self, req: &RequestDescriptor, now: DateTime<Utc>) -> ResponseDescriptor {
        match self.try_dispatch(req, now) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status().is_server_error() {
                    tracing::error!(request_id = %req.request_id(), path = req.path(), error = %err, "request failed");
                } else {
                    tracing::warn!(request_id = %req.request_id(), path = req.path(), error = %err, "request rejected");
                }
                ResponseDescriptor::from_error(&err)
            }
        }
    }

    pub fn try_dispatch(
        &self,
        req: &RequestDescriptor,
        now: DateTime<Utc>,
    ) -> Result<ResponseDescriptor, DispatchError> {
        if !matches!(*req.method(), Method::GET | Method::HEAD) {
            return Err(DispatchError::MethodNotAllowed {
                method: req.method().clone(),
            });
        }

        let endpoint: Endpoint = req.path().parse().map_err(|_| DispatchError::NotFound {
            path: req.path().to_owned(),
        })?;

        match &endpoint {
            Endpoint::Index => Ok(ResponseDescriptor::html(render_index(self.counter.total()))),

            Endpoint::Status => ResponseDescriptor::json(
                StatusCode::OK,
                &StatusReport::new(self.counter.total(), now),
            ),

            Endpoint::CacheTest => {
                let cache_control = requested_cache_control(&req.query()?)?;
                let seed = self.counter.next();
                let directives = CacheDirectives::with_validators(cache_control, seed, now);
                self.image_response(req, &endpoint, seed, directives, now)
            }

            // No query parameter applies to this route.
            Endpoint::NoCache => {
                let seed = self.counter.next();
                self.image_response(req, &endpoint, seed, CacheDirectives::no_store(), now)
            }

            Endpoint::MaxAge(raw) => {
                let seconds = decode_segment(raw)
                    .as_deref()
                    .and_then(parse_delta_seconds)
                    .ok_or_else(|| {
                        DispatchError::invalid_parameter(
                            "seconds",
                            raw,
                            "expected a non-negative whole number of seconds",
                        )
                    })?;
                let seed = self.counter.next();
                self.image_response(req, &endpoint, seed, CacheDirectives::max_age(seconds), now)
            }
        }
    }

    fn image_response(
        &self,
        req: &RequestDescriptor,
        endpoint: &Endpoint,
        seed: u64,
        directives: CacheDirectives,
        now: DateTime<Utc>,
    ) -> Result<ResponseDescriptor, DispatchError> {
        let png = self.generator.generate(seed, now)?;

        tracing::info!(
            request_id = %req.request_id(),
            route = endpoint.label(),
            seed,
            cache_control = %directives.cache_control,
            size_mb = %format!("{:.2}", png.len() as f64 / 1024.0 / 1024.0),
            "image generated"
        );

        let mut headers = HeaderBuilder::default();
        headers.content_type("image/png");
        directives.apply(&mut headers);

        Ok(ResponseDescriptor::png(headers, png))
    }
}

/// Percent-decoded path segment, `None` when it is not valid UTF-8.
fn decode_segment(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// `cacheControl` wins over `maxAge`; both are validated when present.
fn requested_cache_control(query: &QueryParams) -> Result<CacheControl, DispatchError> {
    let max_age = match query.get("maxAge") {
        Some(raw) => parse_delta_seconds(raw).ok_or_else(|| {
            DispatchError::invalid_parameter(
                "maxAge",
                raw,
                "expected a non-negative whole number of seconds",
            )
        })?,
        None => DEFAULT_MAX_AGE,
    };

    match query.get("cacheControl") {
        Some(raw) => CacheControl::parse(raw)
            .map_err(|e| DispatchError::invalid_parameter("cacheControl", raw, e)),
        None => Ok(CacheControl::public_max_age(max_age)),
    }
}
