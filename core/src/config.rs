//! Client configuration.
//!
//! `base_url` is the only field the core reads. Anything else in the source
//! document lands in `options` and is left for the transport to interpret.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HttprError, Result};

/// Environment variable read by `HttprConfig::from_env`.
pub const BASE_URL_ENV: &str = "HTTPR_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttprConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl HttprConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| HttprError::Config(e.to_string()))
    }

    /// Build a config whose base URL comes from `HTTPR_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|e| HttprError::Config(format!("{BASE_URL_ENV}: {e}")))?;
        Ok(Self::new(base_url))
    }
}
