//! # SendButton Component
//!
//! The clickable submit control next to the prompt box. Enabled only when a
//! non-blank prompt is present and no request is pending; shows a spinner
//! while pending.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const SEND_BUTTON_WIDTH: u16 = 12;
pub const SEND_BUTTON_HEIGHT: u16 = 3;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame_index: usize) -> &'static str {
    SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]
}

pub struct SendButton {
    pub enabled: bool,
    pub pending: bool,
    pub spinner_frame: usize,
}

impl SendButton {
    pub fn label(&self) -> String {
        if self.pending {
            format!("{} Wait", spinner(self.spinner_frame))
        } else {
            "➤ Send".to_string()
        }
    }

    fn style(&self) -> Style {
        if self.enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        }
    }
}

impl Component for SendButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(self.style())
            .block(block);
        frame.render_widget(button, area);
    }
}
