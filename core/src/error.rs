//! Error types for the httpr client.
//!
//! # Design
//! The core performs no local recovery, so every failure reaches the caller
//! as one of these variants. `Rejected` is the failed-request outcome: it
//! carries the transport's rejection after every `after_error` hook has
//! rewritten it.

use thiserror::Error;

use crate::chain::Hook;
use crate::http::HttpResponse;

pub type Result<T> = std::result::Result<T, HttprError>;

/// Errors returned by the builder, the pipeline and the client.
#[derive(Debug, Error)]
pub enum HttprError {
    /// A body or the query params could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// An interceptor hook failed; the rest of the chain did not run.
    #[error("interceptor `{name}` failed in {hook}: {message}")]
    Interceptor {
        name: String,
        hook: Hook,
        message: String,
    },

    /// The transport rejected the request.
    #[error("request rejected with status {}", .0.status)]
    Rejected(HttpResponse),

    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HttprError {
    pub fn interceptor(name: impl Into<String>, hook: Hook, message: impl Into<String>) -> Self {
        HttprError::Interceptor {
            name: name.into(),
            hook,
            message: message.into(),
        }
    }

    /// The rejected response, if this is a transport rejection.
    pub fn rejection(&self) -> Option<&HttpResponse> {
        match self {
            HttprError::Rejected(response) => Some(response),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HttprError {
    fn from(e: serde_json::Error) -> Self {
        HttprError::Serialization(e.to_string())
    }
}
