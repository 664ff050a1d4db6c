//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::generation::{ArticleProvider, ProviderError};

/// A provider that answers every request with a fixed article and records
/// the prompts it was given.
pub struct StubProvider {
    article: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(article: Option<&str>) -> Self {
        Self {
            article: article.map(str::to_string),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ArticleProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate_article(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        self.prompts
            .lock()
            .map_err(|_| ProviderError::Config("poisoned".to_string()))?
            .push(prompt.to_string());
        Ok(self.article.clone())
    }

    async fn check_health(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Creates a test App on the writer page with a StubProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubProvider::new(None)), "/services")
}

