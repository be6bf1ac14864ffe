//! Response post-processing for both transport outcomes.
//!
//! # Design
//! Success and failure each get their own entry point. Interceptors may
//! rewrite the payload but never the classification: `on_error` always
//! yields an error, even when every hook succeeds.

use std::sync::Arc;

use crate::chain::{self, Interceptor};
use crate::error::{HttprError, Result};
use crate::http::HttpResponse;

/// Run a resolved response through every `after_success` hook.
pub fn on_success(interceptors: &[Arc<dyn Interceptor>], response: HttpResponse) -> Result<HttpResponse> {
    let response = chain::after_success(response, interceptors)?;
    tracing::debug!(status = response.status, "request succeeded");
    Ok(response)
}

/// Run a rejected response through every `after_error` hook.
///
/// Returns `HttprError::Rejected` carrying the rewritten response, or the
/// hook's own error if one of them fails.
pub fn on_error(interceptors: &[Arc<dyn Interceptor>], response: HttpResponse) -> HttprError {
    match chain::after_error(response, interceptors) {
        Ok(response) => {
            tracing::debug!(status = response.status, "request rejected");
            HttprError::Rejected(response)
        }
        Err(e) => e,
    }
}
