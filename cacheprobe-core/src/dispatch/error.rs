use crate::synth::GenerateError;
use http::{Method, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no route for {path}")]
    NotFound { path: String },

    #[error("method {method} is not allowed")]
    MethodNotAllowed { method: Method },

    #[error("query string does not decode to valid utf-8")]
    MalformedQuery,

    #[error("invalid {name} parameter {value:?}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("image generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("request handler did not complete")]
    Internal,
}

impl DispatchError {
    pub fn invalid_parameter(name: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedQuery | Self::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            Self::Generate(_) | Self::Serialize(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
