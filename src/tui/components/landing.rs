//! # Landing Page Component
//!
//! The Home page: a centered welcome with a pointer to the writer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::generation::BackendStatus;
use crate::tui::component::Component;
use crate::tui::components::title_bar::{TAGLINE, TITLE};

pub struct LandingPage {
    pub backend: BackendStatus,
}

impl LandingPage {
    pub fn new(backend: BackendStatus) -> Self {
        Self { backend }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_lines = vec![
            Line::styled(
                TITLE,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(TAGLINE, Style::default().fg(Color::Gray)),
            Line::default(),
            Line::styled(
                "Open Services (F2) to start writing",
                Style::default().fg(Color::Yellow),
            ),
            Line::default(),
            Line::styled(
                format!("backend: {}", self.backend.label()),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(text_lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );
    }
}
