//! The client: configuration, interceptors and a transport in one value.
//!
//! # Design
//! `Httpr` holds its `base_url`, the ordered interceptor list and the
//! transport. Nothing per-request is stored on it, so a shared reference can
//! drive any number of concurrent requests. Each request is split into
//! `build` (settings), the transport call, and `on_success`/`on_error`
//! (post-processing), and each step is callable on its own.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::body::RequestBody;
use crate::builder;
use crate::chain::Interceptor;
use crate::config::HttprConfig;
use crate::error::{HttprError, Result};
use crate::http::{Headers, HttpMethod, HttpResponse, Params, RequestSettings};
use crate::pipeline;
use crate::transport::Transport;

/// HTTP client that prepares requests and hands them to `T`.
pub struct Httpr<T> {
    config: HttprConfig,
    interceptors: Vec<Arc<dyn Interceptor>>,
    transport: T,
}

impl<T: Transport> Httpr<T> {
    pub fn new(config: HttprConfig, transport: T) -> Self {
        Self {
            config,
            interceptors: Vec::new(),
            transport,
        }
    }

    pub fn config(&self) -> &HttprConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.interceptors
    }

    /// Append an interceptor. Hooks run in registration order.
    pub fn add_interceptor(&mut self, interceptor: impl Interceptor + 'static) -> &mut Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.add_interceptor(interceptor);
        self
    }

    /// Prepare settings for one request without sending it.
    pub fn build(
        &self,
        method: Option<HttpMethod>,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<RequestSettings> {
        builder::build(&self.config, &self.interceptors, method, url, params, headers, body)
    }

    pub fn on_success(&self, response: HttpResponse) -> Result<HttpResponse> {
        pipeline::on_success(&self.interceptors, response)
    }

    pub fn on_error(&self, response: HttpResponse) -> HttprError {
        pipeline::on_error(&self.interceptors, response)
    }

    /// Build, send through the transport, then post-process the outcome.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        let settings = self.build(Some(method), url, params, headers, body)?;
        match self.transport.request(settings).await {
            Ok(response) => self.on_success(response),
            Err(response) => Err(self.on_error(response)),
        }
    }

    pub async fn get(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Get, url, params, headers, body).await
    }

    pub async fn post(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Post, url, params, headers, body).await
    }

    pub async fn put(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Put, url, params, headers, body).await
    }

    pub async fn delete(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Delete, url, params, headers, body).await
    }

    pub async fn patch(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Patch, url, params, headers, body).await
    }

    pub async fn head(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Head, url, params, headers, body).await
    }

    pub async fn options(
        &self,
        url: &str,
        params: Option<Params>,
        headers: Option<Headers>,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        self.request(HttpMethod::Options, url, params, headers, body).await
    }

    /// `request` with the optional parts gathered in a `RequestOptions`.
    pub async fn send(&self, method: HttpMethod, url: &str, options: RequestOptions) -> Result<HttpResponse> {
        let RequestOptions { params, headers, body } = options;
        self.request(method, url, params, headers, body.as_ref()).await
    }
}

/// Optional params, headers and body for `Httpr::send`.
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub params: Option<Params>,
    pub headers: Option<Headers>,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<S: Serialize>(mut self, value: &S) -> Result<Self> {
        self.body = Some(RequestBody::json(value)?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{CONTENT_TYPE, TEXT_PLAIN};
    use crate::transport::NoopTransport;
    use serde_json::json;

    fn client() -> Httpr<NoopTransport> {
        Httpr::new(HttprConfig::new("http://api.test/"), NoopTransport)
    }

    struct Stamp;

    impl Interceptor for Stamp {
        fn before_request(&self, mut settings: RequestSettings) -> Result<RequestSettings> {
            settings.headers.insert("X-Stamp".to_string(), "1".to_string());
            Ok(settings)
        }
    }

    #[test]
    fn build_resolves_against_base_url() {
        let settings = client().build(None, "/users/1", None, None, None).unwrap();
        assert_eq!(settings.url, "http://api.test/users/1");
        assert_eq!(settings.method, HttpMethod::Get);
    }

    #[test]
    fn registration_is_append_only_in_order() {
        let mut c = client();
        c.add_interceptor(Stamp).add_interceptor(Stamp);
        assert_eq!(c.interceptors().len(), 2);
        let settings = c.build(None, "x", None, None, None).unwrap();
        assert_eq!(settings.headers["X-Stamp"], "1");
    }

    #[test]
    fn on_error_always_rejects() {
        let c = client().with_interceptor(Stamp);
        let err = c.on_error(HttpResponse::new(500, "{}"));
        assert_eq!(err.rejection().map(|r| r.status), Some(500));
    }

    #[test]
    fn options_builder_collects_parts() {
        let options = RequestOptions::new()
            .param("page", 2)
            .header("Accept", "application/json")
            .body("hi");
        assert_eq!(options.params.as_ref().unwrap()["page"], json!(2));
        assert_eq!(options.headers.as_ref().unwrap()["Accept"], "application/json");
        assert!(matches!(options.body, Some(RequestBody::Value(Value::String(ref s))) if s == "hi"));
    }

    #[test]
    fn options_json_body() {
        let options = RequestOptions::new().json(&json!({"a": [1]})).unwrap();
        let settings = client()
            .build(Some(HttpMethod::Post), "/a", None, None, options.body.as_ref())
            .unwrap();
        assert_eq!(settings.body.as_deref(), Some(r#"{"a":[1]}"#));
        assert_ne!(settings.headers[CONTENT_TYPE], TEXT_PLAIN);
    }
}
