//! Request settings assembly.
//!
//! # Design
//! `build` is pure data transformation: it resolves the URL, fills in
//! defaults, serializes the body and runs the `before_request` hooks. The
//! transport is invoked separately, so a built request can be inspected or
//! tested without any I/O.

use std::sync::Arc;

use crate::body::{self, RequestBody};
use crate::chain::{self, Interceptor};
use crate::config::HttprConfig;
use crate::error::Result;
use crate::http::{Headers, HttpMethod, Params, RequestSettings};
use crate::url;

/// Assemble the settings for one request and pass them through every
/// `before_request` hook in registration order.
pub fn build(
    config: &HttprConfig,
    interceptors: &[Arc<dyn Interceptor>],
    method: Option<HttpMethod>,
    url: &str,
    params: Option<Params>,
    headers: Option<Headers>,
    body: Option<&RequestBody>,
) -> Result<RequestSettings> {
    let mut headers = headers.unwrap_or_default();
    let body = body::serialize(body, &mut headers)?;

    let settings = RequestSettings {
        method: method.unwrap_or_default(),
        url: url::join(&config.base_url, url),
        headers,
        params: params.unwrap_or_default(),
        body,
    };

    let settings = chain::before_request(settings, interceptors)?;
    tracing::debug!(
        method = %settings.method,
        url = %settings.url,
        interceptors = interceptors.len(),
        "built request"
    );
    Ok(settings)
}
