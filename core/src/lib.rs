//! Thin HTTP client core with an interceptor pipeline.
//!
//! # Overview
//! Builds `RequestSettings` from a method, URL, params, headers and body,
//! passes them through the registered interceptors, and hands the result to
//! an injected `Transport`. The transport's outcome flows back through the
//! interceptors' success or error hooks before reaching the caller.
//!
//! # Design
//! - `Httpr` owns its config, interceptors and transport; there is no global
//!   instance.
//! - Settings building and response post-processing are synchronous and free
//!   of I/O; the transport call is the only await point.
//! - Bodies are inferred: structured bodies describe themselves, an explicit
//!   content-type is respected, objects and arrays become JSON, other values
//!   plain text.
//! - Hooks run in registration order for requests, successes and errors
//!   alike, and every hook runs unless one fails.

pub mod body;
pub mod builder;
pub mod chain;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod media;
pub mod pipeline;
pub mod transport;
pub mod url;

pub use body::{FormBody, JsonBody, RequestBody, StructuredBody};
pub use chain::{Hook, Interceptor};
pub use client::{Httpr, RequestOptions};
pub use config::HttprConfig;
pub use error::{HttprError, Result};
pub use http::{Headers, HttpMethod, HttpResponse, Params, RequestSettings};
pub use transport::{NoopTransport, Transport};
