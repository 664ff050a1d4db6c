//! Wire types for the article backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/generate-article`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArticleRequest<'a> {
    pub prompt: &'a str,
}

/// Body returned by the generate endpoint.
///
/// Parsed loosely from a `serde_json::Value`: a body that is valid JSON but not
/// an object, or an object without a usable `article`, yields `article: None`
/// rather than an error. Non-zero numbers and `true` are rendered as text;
/// empty strings, zero, `false`, `null` and nested values count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleResponse {
    pub article: Option<String>,
}

impl ArticleResponse {
    pub fn from_value(value: &Value) -> Self {
        let article = match value.get("article") {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Some(Value::Bool(true)) => Some("true".to_string()),
            _ => None,
        };
        Self { article }
    }
}

/// Body returned by `GET /health`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// Backend reachability as last observed by the health probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Unknown => "checking",
            BackendStatus::Online => "online",
            BackendStatus::Offline => "offline",
        }
    }
}
