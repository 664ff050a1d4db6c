use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to the article backend.
///
/// The UI collapses all of these into one message; the variants exist so the
/// log says what actually went wrong.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (bad URL, client could not be built).
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The configured request timeout elapsed.
    Timeout,
    /// Backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Response body was not JSON.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Timeout => write!(f, "request timed out"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Sends one generation request for `prompt`.
    ///
    /// `Ok(None)` means the backend answered with JSON that carried no
    /// article; callers substitute their own fallback text.
    async fn generate_article(&self, prompt: &str) -> Result<Option<String>, ProviderError>;

    /// Probes the backend's health endpoint.
    async fn check_health(&self) -> Result<(), ProviderError>;
}
