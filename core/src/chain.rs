//! Interceptors and the ordered chain that applies them.
//!
//! # Design
//! Every hook takes its input by value and returns the value that replaces
//! it, so the chain is a fold over the registered interceptors. All three
//! hooks run in registration order. There is no early exit: the only way to
//! stop a chain is for a hook to return `Err`.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::http::{HttpResponse, RequestSettings};

/// A unit of request/response processing registered on a client.
///
/// All hooks default to returning their input untouched.
pub trait Interceptor: Send + Sync {
    /// Name used in logs and in `HttprError::Interceptor`.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn before_request(&self, settings: RequestSettings) -> Result<RequestSettings> {
        Ok(settings)
    }

    fn after_success(&self, response: HttpResponse) -> Result<HttpResponse> {
        Ok(response)
    }

    fn after_error(&self, response: HttpResponse) -> Result<HttpResponse> {
        Ok(response)
    }
}

/// Which hook a chain invocation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    BeforeRequest,
    AfterSuccess,
    AfterError,
}

impl Hook {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::BeforeRequest => "before_request",
            Hook::AfterSuccess => "after_success",
            Hook::AfterError => "after_error",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thread `value` through `apply` for each interceptor in order.
///
/// The first `Err` aborts the chain and is returned as-is.
pub fn run_chain<T, F>(value: T, interceptors: &[Arc<dyn Interceptor>], hook: Hook, apply: F) -> Result<T>
where
    F: Fn(&dyn Interceptor, T) -> Result<T>,
{
    interceptors.iter().try_fold(value, |acc, interceptor| {
        tracing::trace!(interceptor = interceptor.name(), %hook, "applying hook");
        apply(&**interceptor, acc)
    })
}

/// Run every `before_request` hook.
pub fn before_request(settings: RequestSettings, interceptors: &[Arc<dyn Interceptor>]) -> Result<RequestSettings> {
    run_chain(settings, interceptors, Hook::BeforeRequest, |i, s| i.before_request(s))
}

/// Run every `after_success` hook.
pub fn after_success(response: HttpResponse, interceptors: &[Arc<dyn Interceptor>]) -> Result<HttpResponse> {
    run_chain(response, interceptors, Hook::AfterSuccess, |i, r| i.after_success(r))
}

/// Run every `after_error` hook.
pub fn after_error(response: HttpResponse, interceptors: &[Arc<dyn Interceptor>]) -> Result<HttpResponse> {
    run_chain(response, interceptors, Hook::AfterError, |i, r| i.after_error(r))
}
