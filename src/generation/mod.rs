//! # Article Generation Client
//!
//! Everything that talks to the external article backend lives here. The core
//! reducer never sees reqwest types; it only sees `Option<String>` results and
//! `ProviderError`s routed back through actions.

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ArticleProvider, ProviderError};
pub use providers::HttpArticleProvider;
pub use types::{ArticleRequest, ArticleResponse, BackendStatus, HealthResponse};
