//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard/mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Pending** (request in flight): draws every ~80ms so the spinner and
//!   skeleton shimmer animate.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Request Lifecycle
//!
//! `update()` returns `Effect::SpawnRequest` when a submit is accepted. The
//! request runs on a tokio task and reports back with
//! `Action::GenerationFinished` over an mpsc channel drained each loop turn.
//! There is no cancellation: navigating away only discards the form, and the
//! late response is dropped by `update()`.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::nav::{NAV_ITEMS, Page};
use crate::core::state::App;
use crate::generation::{ArticleProvider, BackendStatus, HttpArticleProvider, ProviderError};
use crate::tui::component::EventHandler;
use crate::tui::components::nav_bar;
use crate::tui::components::{ArticlePanelState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub article: ArticlePanelState,
    /// Screen rect of each nav tab from the last render (hit testing)
    pub nav_regions: Vec<Rect>,
    /// Screen rect of the send button from the last render, if shown
    pub send_button_area: Option<Rect>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            article: ArticlePanelState::new(),
            nav_regions: Vec::new(),
            send_button_area: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets us tell Shift+Enter from Enter; terminals
        // without it ignore the request and users fall back to Ctrl+J
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Build the article provider from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Result<Arc<dyn ArticleProvider>, ProviderError> {
    let provider = HttpArticleProvider::new(config.base_url.clone(), config.request_timeout)?;
    info!(
        "Using article backend at {} (timeout: {:?})",
        provider.base_url(),
        config.request_timeout
    );
    Ok(Arc::new(provider))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config).map_err(std::io::Error::other)?;
    let mut app = App::from_config(provider, &config);
    let mut tui = TuiState::new();

    let (tx, rx) = mpsc::channel();
    if config.health_check {
        spawn_health_check(app.provider.clone(), tx.clone());
    }

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &tx, &rx);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        let animating = app.form.pending;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything already queued before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event, tx) {
                return Ok(());
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, tui, action, tx) {
                return Ok(());
            }
        }
    }
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::Quit | TuiEvent::ForceQuit => dispatch(app, tui, Action::Quit, tx),
        TuiEvent::NavigateTo(index) => match NAV_ITEMS.get(index) {
            Some(item) => dispatch(app, tui, Action::Navigate(item.path.to_string()), tx),
            None => false,
        },
        TuiEvent::NavigateNext => {
            let next = app
                .active_nav_index()
                .map(|i| (i + 1) % NAV_ITEMS.len())
                .unwrap_or(0);
            dispatch(app, tui, Action::Navigate(NAV_ITEMS[next].path.to_string()), tx)
        }
        TuiEvent::MouseClick(column, row) => {
            if let Some(index) = nav_bar::hit_test(&tui.nav_regions, column, row) {
                let path = NAV_ITEMS[index].path.to_string();
                return dispatch(app, tui, Action::Navigate(path), tx);
            }
            let on_button = tui
                .send_button_area
                .is_some_and(|area| area.contains(Position::new(column, row)));
            on_button && dispatch(app, tui, Action::Submit, tx)
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.article.handle_event(&event);
            false
        }
        _ => {
            if app.page() != Page::Writer {
                return false;
            }
            tui.input_box.disabled = app.form.pending;
            match tui.input_box.handle_event(&event) {
                Some(InputEvent::ContentChanged) => {
                    let text = tui.input_box.buffer.clone();
                    dispatch(app, tui, Action::UpdatePrompt(text), tx)
                }
                Some(InputEvent::Submit) => dispatch(app, tui, Action::Submit, tx),
                Some(InputEvent::CursorMoved) | None => false,
            }
        }
    }
}

/// Apply an action and carry out its effect. Returns true on quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnRequest { form_id, prompt } => {
            tui.article.scroll_to_top();
            spawn_request(app.provider.clone(), form_id, prompt, tx.clone());
            false
        }
        Effect::ResetForm => {
            tui.input_box.reset();
            tui.article = ArticlePanelState::new();
            false
        }
    }
}

fn spawn_request(
    provider: Arc<dyn ArticleProvider>,
    form_id: u64,
    prompt: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning generation request via {} (form {})", provider.name(), form_id);
    tokio::spawn(async move {
        let started = Instant::now();
        let result = provider.generate_article(&prompt).await;
        match &result {
            Ok(_) => info!("Generation finished in {}ms", started.elapsed().as_millis()),
            Err(e) => info!("Generation failed after {}ms: {}", started.elapsed().as_millis(), e),
        }
        if tx.send(Action::GenerationFinished { form_id, result }).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}

fn spawn_health_check(provider: Arc<dyn ArticleProvider>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let status = match provider.check_health().await {
            Ok(()) => BackendStatus::Online,
            Err(e) => {
                warn!("Backend health check failed: {}", e);
                BackendStatus::Offline
            }
        };
        if tx.send(Action::BackendChecked(status)).is_err() {
            warn!("Failed to send health status: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn type_prompt(app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c), tx);
        }
    }

    fn writer_tui() -> TuiState {
        let mut tui = TuiState::new();
        // As if the writer page had been drawn
        tui.send_button_area = Some(Rect::new(50, 5, 12, 3));
        tui
    }

    #[test]
    fn test_typing_updates_core_prompt() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = writer_tui();
        type_prompt(&mut app, &mut tui, &tx, "Rust");
        assert_eq!(app.form.prompt, "Rust");
    }

    #[test]
    fn test_blank_submit_spawns_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = writer_tui();
        type_prompt(&mut app, &mut tui, &tx, "   ");
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Submit, &tx));
        assert!(!app.form.pending);
        drop(tx);
        assert!(rx.recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_channel() {
        let (tx, rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = writer_tui();
        type_prompt(&mut app, &mut tui, &tx, "  Rust  ");
        handle_event(&mut app, &mut tui, TuiEvent::Submit, &tx);
        assert!(app.form.pending);

        // Edits are ignored while pending
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('x'), &tx);
        assert_eq!(app.form.prompt, "  Rust  ");

        let action = tokio::task::spawn_blocking(move || rx.recv().unwrap())
            .await
            .unwrap();
        dispatch(&mut app, &mut tui, action, &tx);
        assert!(!app.form.pending);
        assert_eq!(app.form.result, crate::core::state::FALLBACK_RESULT);
    }

    #[tokio::test]
    async fn test_click_on_send_button_submits() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = writer_tui();
        type_prompt(&mut app, &mut tui, &tx, "Rust");

        // Outside the button
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(10, 20), &tx);
        assert!(!app.form.pending);

        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(55, 6), &tx);
        assert!(app.form.pending);
    }

    #[test]
    fn test_nav_click_and_keys_navigate() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = writer_tui();
        tui.nav_regions = vec![
            Rect::new(10, 1, 8, 1),
            Rect::new(20, 1, 8, 1),
            Rect::new(30, 1, 8, 1),
        ];
        type_prompt(&mut app, &mut tui, &tx, "draft");

        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(32, 1), &tx);
        assert_eq!(app.location, "/about");
        assert!(tui.input_box.buffer.is_empty());
        assert!(app.form.prompt.is_empty());

        handle_event(&mut app, &mut tui, TuiEvent::NavigateNext, &tx);
        assert_eq!(app.location, "/");

        handle_event(&mut app, &mut tui, TuiEvent::NavigateTo(1), &tx);
        assert_eq!(app.location, "/services");

        handle_event(&mut app, &mut tui, TuiEvent::NavigateTo(9), &tx);
        assert_eq!(app.location, "/services");
    }

    #[test]
    fn test_quit_events() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = writer_tui();
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Quit, &tx));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit, &tx));
    }
}
