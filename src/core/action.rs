//! # Actions
//!
//! Everything that can happen in Scribe becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend responds? That's `Action::GenerationFinished { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what I/O to start. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, ERROR_RESULT, FALLBACK_RESULT, FormState};
use crate::generation::{BackendStatus, ProviderError};

#[derive(Debug)]
pub enum Action {
    /// Replace the prompt text (every keystroke).
    UpdatePrompt(String),
    /// Submit the current prompt.
    Submit,
    /// The request spawned for form `form_id` finished.
    GenerationFinished {
        form_id: u64,
        result: Result<Option<String>, ProviderError>,
    },
    /// Move to another page.
    Navigate(String),
    /// Health probe finished.
    BackendChecked(BackendStatus),
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Send `prompt` to the backend and report back tagged with `form_id`.
    SpawnRequest { form_id: u64, prompt: String },
    /// The form was discarded; adapter-side form state must be cleared too.
    ResetForm,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::UpdatePrompt(text) => {
            if app.form.pending {
                debug!("Ignoring prompt edit while a request is pending");
                return Effect::None;
            }
            app.form.prompt = text;
            Effect::None
        }
        Action::Submit => {
            if app.form.pending {
                debug!("Submit ignored: request already pending");
                return Effect::None;
            }
            let Some(prompt) = app.form.trimmed_prompt().map(str::to_string) else {
                debug!("Submit ignored: prompt is blank");
                return Effect::None;
            };
            info!("Submitting prompt ({} bytes) for form {}", prompt.len(), app.form_id);
            app.form.pending = true;
            app.status_message = "Generating...".to_string();
            Effect::SpawnRequest {
                form_id: app.form_id,
                prompt,
            }
        }
        Action::GenerationFinished { form_id, result } => {
            if form_id != app.form_id {
                info!(
                    "Dropping response for discarded form {} (current {})",
                    form_id, app.form_id
                );
                return Effect::None;
            }
            app.form.result = match result {
                Ok(Some(article)) => article,
                Ok(None) => FALLBACK_RESULT.to_string(),
                Err(e) => {
                    warn!("Error generating article: {}", e);
                    ERROR_RESULT.to_string()
                }
            };
            app.form.pending = false;
            app.status_message.clear();
            Effect::None
        }
        Action::Navigate(path) => {
            if path == app.location {
                return Effect::None;
            }
            info!("Navigating {} -> {}", app.location, path);
            app.location = path;
            app.form = FormState::default();
            app.form_id += 1;
            app.status_message.clear();
            Effect::ResetForm
        }
        Action::BackendChecked(status) => {
            info!("Backend status: {:?}", status);
            app.backend = status;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
