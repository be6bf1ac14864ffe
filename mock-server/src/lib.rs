use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What the server saw, returned by every `/echo` request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/echo/{*rest}", any(echo))
        .route("/status/{code}", any(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    tracing::debug!(%method, %uri, "echo");
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    })
}

async fn status(Path(code): Path<u16>) -> (StatusCode, Json<Value>) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, Json(json!({ "status": code }))),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid status code {code}") })),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_serializes_to_json() {
        let echo = Echo {
            method: "POST".to_string(),
            path: "/echo/users".to_string(),
            query: None,
            headers: BTreeMap::from([("content-type".to_string(), "text/plain".to_string())]),
            body: "hi".to_string(),
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["query"], Value::Null);
        assert_eq!(json["headers"]["content-type"], "text/plain");
    }

    #[test]
    fn echo_roundtrips_through_json() {
        let echo = Echo {
            method: "GET".to_string(),
            path: "/echo".to_string(),
            query: Some("a=1".to_string()),
            headers: BTreeMap::new(),
            body: String::new(),
        };
        let back: Echo = serde_json::from_str(&serde_json::to_string(&echo).unwrap()).unwrap();
        assert_eq!(back, echo);
    }
}
