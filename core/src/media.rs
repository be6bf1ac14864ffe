//! Header names and media types used by the body serializer.

pub const CONTENT_TYPE: &str = "Content-Type";

pub const APPLICATION_JSON: &str = "application/json";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const TEXT_PLAIN: &str = "text/plain";
