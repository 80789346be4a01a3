mod cache_control;
mod directives;
mod dispatcher;
mod endpoint;
mod error;
mod headers;
mod index_page;
mod request;
mod response;
mod status;
#[cfg(test)]
mod tests;

pub use cache_control::{CacheControl, CacheControlError, DEFAULT_MAX_AGE};
pub use directives::CacheDirectives;
pub use dispatcher::Dispatcher;
pub use endpoint::Endpoint;
pub use error::DispatchError;
pub use request::{QueryParams, RequestDescriptor};
pub use response::ResponseDescriptor;
pub use status::StatusReport;
