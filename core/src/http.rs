//! HTTP data types passed between the builder, the interceptors and the
//! transport.
//!
//! # Design
//! Requests and responses are plain data. The builder produces a
//! `RequestSettings`, interceptors replace it wholesale, and the injected
//! transport turns it into an `HttpResponse`. Nothing here touches the
//! network.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HttprError, Result};

/// Request headers. Keys are unique and stored exactly as given.
pub type Headers = BTreeMap<String, String>;

/// Query parameters. Values are left as JSON data until a transport encodes
/// them.
pub type Params = BTreeMap<String, Value>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = HttprError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(HttprError::InvalidMethod(s.to_string())),
        }
    }
}

/// The fully resolved description of one outgoing request.
///
/// Built by `build` and handed to each interceptor's `before_request`, whose
/// return value replaces it. The final value is what the transport executes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestSettings {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub params: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestSettings {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name).map(|(_, v)| v.as_str())
    }

    /// Encode `params` as an `application/x-www-form-urlencoded` query.
    ///
    /// String values are used verbatim; every other value is rendered as its
    /// JSON text.
    pub fn query_string(&self) -> Result<String> {
        let pairs: Vec<(&str, String)> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), value_to_text(v)))
            .collect();
        serde_urlencoded::to_string(pairs).map_err(|e| HttprError::Serialization(e.to_string()))
    }

    /// `url` with the encoded params appended, or `url` alone when there are
    /// no params.
    pub fn full_url(&self) -> Result<String> {
        if self.params.is_empty() {
            return Ok(self.url.clone());
        }
        let query = self.query_string()?;
        let sep = if self.url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{sep}{query}", self.url))
    }
}

/// An HTTP response described as plain data.
///
/// Used for both outcomes of a transport call. A transport that fails before
/// any response arrives reports status `0` and puts the cause in `body`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup; first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub(crate) fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<(&'a String, &'a String)> {
    headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name))
}

/// String form of a JSON value: strings unquoted, everything else as JSON.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        let err = "FETCH".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, HttprError::InvalidMethod(m) if m == "FETCH"));
    }

    #[test]
    fn method_defaults_to_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut settings = RequestSettings::default();
        settings
            .headers
            .insert("content-type".to_string(), "text/csv".to_string());
        assert_eq!(settings.header("Content-Type"), Some("text/csv"));
        assert_eq!(settings.header("Accept"), None);
    }

    #[test]
    fn full_url_without_params_is_url() {
        let settings = RequestSettings {
            url: "http://api.test/users".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.full_url().unwrap(), "http://api.test/users");
    }

    #[test]
    fn full_url_encodes_params() {
        let mut settings = RequestSettings {
            url: "http://api.test/search".to_string(),
            ..Default::default()
        };
        settings.params.insert("q".to_string(), json!("a b"));
        settings.params.insert("page".to_string(), json!(2));
        assert_eq!(settings.full_url().unwrap(), "http://api.test/search?page=2&q=a+b");
    }

    #[test]
    fn full_url_extends_existing_query() {
        let mut settings = RequestSettings {
            url: "http://api.test/search?lang=en".to_string(),
            ..Default::default()
        };
        settings.params.insert("flag".to_string(), json!(true));
        assert_eq!(settings.full_url().unwrap(), "http://api.test/search?lang=en&flag=true");
    }

    #[test]
    fn settings_serialize_without_absent_body() {
        let settings = RequestSettings {
            url: "http://api.test".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["method"], "GET");
        assert!(json.get("body").is_none());
    }

    #[test]
    fn response_success_range() {
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(500, "boom").is_success());
        assert!(!HttpResponse::new(0, "connection refused").is_success());
    }
}
