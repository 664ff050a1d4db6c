//! # Application State
//!
//! Core business state for Scribe. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn ArticleProvider>  // article backend
//! ├── location: String                    // current path
//! ├── form: FormState                     // writer form triple
//! │   ├── prompt: String
//! │   ├── result: String
//! │   └── pending: bool
//! ├── form_id: u64                        // bumped when the form is discarded
//! ├── backend: BackendStatus              // last health probe
//! └── status_message: String              // status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::nav::{self, NAV_ITEMS, Page};
use crate::generation::{ArticleProvider, BackendStatus};

/// Shown when the backend answered but carried no article.
pub const FALLBACK_RESULT: &str = "Article generated successfully!";
/// Shown for every failed request, whatever the cause.
pub const ERROR_RESULT: &str = "Error generating article. Please try again.";

/// The writer form. Discarded on navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub prompt: String,
    pub result: String,
    pub pending: bool,
}

impl FormState {
    /// The prompt as it would be sent, or `None` if blank.
    pub fn trimmed_prompt(&self) -> Option<&str> {
        let trimmed = self.prompt.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && self.trimmed_prompt().is_some()
    }

    /// Whether the result panel should be shown at all.
    pub fn shows_result(&self) -> bool {
        self.pending || !self.result.is_empty()
    }
}

pub struct App {
    pub provider: Arc<dyn ArticleProvider>,
    pub location: String,
    pub form: FormState,
    pub form_id: u64,
    pub backend: BackendStatus,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn ArticleProvider>, location: impl Into<String>) -> Self {
        Self {
            provider,
            location: location.into(),
            form: FormState::default(),
            form_id: 0,
            backend: BackendStatus::default(),
            status_message: String::new(),
        }
    }

    pub fn from_config(provider: Arc<dyn ArticleProvider>, config: &ResolvedConfig) -> Self {
        Self::new(provider, config.initial_path.clone())
    }

    pub fn page(&self) -> Page {
        Page::for_path(&self.location)
    }

    pub fn active_nav_index(&self) -> Option<usize> {
        nav::active_index(NAV_ITEMS, &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.location, "/services");
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.form_id, 0);
        assert_eq!(app.backend, BackendStatus::Unknown);
        assert_eq!(app.page(), Page::Writer);
        assert_eq!(app.active_nav_index(), Some(1));
    }

    #[test]
    fn test_can_submit_requires_non_blank_prompt() {
        let mut form = FormState::default();
        assert!(!form.can_submit());

        form.prompt = "   \n\t ".to_string();
        assert!(!form.can_submit());
        assert_eq!(form.trimmed_prompt(), None);

        form.prompt = "  Rust  ".to_string();
        assert!(form.can_submit());
        assert_eq!(form.trimmed_prompt(), Some("Rust"));
    }

    #[test]
    fn test_can_submit_false_while_pending() {
        let form = FormState {
            prompt: "Rust".to_string(),
            result: String::new(),
            pending: true,
        };
        assert!(!form.can_submit());
        assert!(form.shows_result());
    }

    #[test]
    fn test_shows_result() {
        let mut form = FormState::default();
        assert!(!form.shows_result());
        form.result = "done".to_string();
        assert!(form.shows_result());
    }
}
