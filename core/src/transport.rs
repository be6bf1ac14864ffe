//! The injected capability that performs network I/O.
//!
//! # Design
//! The client never talks to the network itself. A `Transport` receives the
//! final `RequestSettings` and resolves to `Ok(response)` or rejects with
//! `Err(response)`; which of the two is the transport's decision alone.

use std::future::Future;

use crate::http::{HttpResponse, RequestSettings};

/// Executes a fully prepared request.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        settings: RequestSettings,
    ) -> impl Future<Output = Result<HttpResponse, HttpResponse>> + Send;
}

/// Placeholder transport that sends nothing.
///
/// Logs a warning with the settings it was given and resolves with an empty
/// `200` response. Useful until a real transport is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransport;

impl Transport for NoopTransport {
    fn request(
        &self,
        settings: RequestSettings,
    ) -> impl Future<Output = Result<HttpResponse, HttpResponse>> + Send {
        tracing::warn!(
            method = %settings.method,
            url = %settings.url,
            ?settings,
            "no transport configured; request was not sent"
        );
        std::future::ready(Ok(HttpResponse::new(200, "")))
    }
}
