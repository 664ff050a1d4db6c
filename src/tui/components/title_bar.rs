//! # TitleBar Component
//!
//! The writer page heading: a title line and a tagline, both centered.
//!
//! ## Conditional Formatting
//!
//! When a status message is present it replaces the tagline, so transient
//! state ("Generating...") is visible without taking extra rows:
//!
//! 1. **Status message**: `"✦ AI Article Writer"` / `"Generating..."`
//! 2. **Default**: `"✦ AI Article Writer"` / tagline

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "✦ AI Article Writer";
pub const TAGLINE: &str = "Transform your ideas into compelling articles with AI";
pub const TITLE_BAR_HEIGHT: u16 = 2;

/// Page heading.
///
/// # Props
///
/// - `status_message`: transient status; empty shows the tagline
pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    fn subtitle(&self) -> Line<'_> {
        if self.status_message.is_empty() {
            Line::styled(TAGLINE, Style::default().fg(Color::Gray))
        } else {
            Line::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Yellow),
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled(
                TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            self.subtitle(),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
