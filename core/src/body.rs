//! Request body serialization by content-type inference.
//!
//! # Design
//! A body is either plain JSON data or a `StructuredBody` that knows its own
//! media type. The serializer decides, in a fixed order, which content-type
//! to declare and what string to send:
//!
//! 1. no body: nothing changes
//! 2. structured body: its own type and serialization
//! 3. caller already set a content-type: body passed through
//! 4. object or array: `application/json`
//! 5. anything else: `text/plain`

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{HttprError, Result};
use crate::http::{find_header, value_to_text, Headers};
use crate::media::{APPLICATION_JSON, CONTENT_TYPE, FORM_URLENCODED, TEXT_PLAIN};

/// A body that reports its own media type and renders itself.
pub trait StructuredBody: Send + Sync {
    fn content_type(&self) -> &str;

    fn serialize(&self) -> Result<String>;
}

/// The body handed to the request builder.
pub enum RequestBody {
    /// Plain data. `Value::Null` is treated as no body.
    Value(Value),
    Structured(Box<dyn StructuredBody>),
}

impl RequestBody {
    pub fn structured(body: impl StructuredBody + 'static) -> Self {
        RequestBody::Structured(Box::new(body))
    }

    /// Serialize `value` into plain JSON data.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(RequestBody::Value(serde_json::to_value(value)?))
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Value(v) => f.debug_tuple("Value").field(v).finish(),
            RequestBody::Structured(b) => f
                .debug_struct("Structured")
                .field("content_type", &b.content_type())
                .finish_non_exhaustive(),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(v: Value) -> Self {
        RequestBody::Value(v)
    }
}

impl From<&str> for RequestBody {
    fn from(s: &str) -> Self {
        RequestBody::Value(Value::String(s.to_string()))
    }
}

impl From<String> for RequestBody {
    fn from(s: String) -> Self {
        RequestBody::Value(Value::String(s))
    }
}

/// Pick the payload for `body`, writing any inferred content-type into
/// `headers`.
pub fn serialize(body: Option<&RequestBody>, headers: &mut Headers) -> Result<Option<String>> {
    let value = match body {
        None | Some(RequestBody::Value(Value::Null)) => return Ok(None),
        Some(RequestBody::Structured(structured)) => {
            let payload = structured.serialize()?;
            set_content_type(headers, structured.content_type());
            return Ok(Some(payload));
        }
        Some(RequestBody::Value(value)) => value,
    };

    if find_header(headers, CONTENT_TYPE).is_some() {
        return Ok(Some(value_to_text(value)));
    }

    match value {
        Value::Object(_) | Value::Array(_) => {
            let payload = serde_json::to_string(value)?;
            set_content_type(headers, APPLICATION_JSON);
            Ok(Some(payload))
        }
        primitive => {
            set_content_type(headers, TEXT_PLAIN);
            Ok(Some(value_to_text(primitive)))
        }
    }
}

/// Replace any existing content-type, whatever its casing, with `media_type`.
fn set_content_type(headers: &mut Headers, media_type: &str) {
    headers.retain(|k, _| !k.eq_ignore_ascii_case(CONTENT_TYPE));
    headers.insert(CONTENT_TYPE.to_string(), media_type.to_string());
}

/// An `application/x-www-form-urlencoded` body built from key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormBody {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl StructuredBody for FormBody {
    fn content_type(&self) -> &str {
        FORM_URLENCODED
    }

    fn serialize(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.fields).map_err(|e| HttprError::Serialization(e.to_string()))
    }
}

/// A JSON body declared under a caller-chosen media type, such as
/// `application/vnd.api+json`.
#[derive(Debug, Clone)]
pub struct JsonBody {
    media_type: String,
    value: Value,
}

impl JsonBody {
    pub fn new<T: Serialize>(media_type: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            media_type: media_type.into(),
            value: serde_json::to_value(value)?,
        })
    }
}

impl StructuredBody for JsonBody {
    fn content_type(&self) -> &str {
        &self.media_type
    }

    fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.value)?)
    }
}
