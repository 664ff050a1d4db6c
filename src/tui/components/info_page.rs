//! Static text pages: About and the not-found fallback.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const PAGE_WIDTH: u16 = 64;

pub struct InfoPage {
    pub title: String,
    pub body: Vec<String>,
}

impl InfoPage {
    pub fn about() -> Self {
        Self {
            title: "About".to_string(),
            body: vec![
                "Scribe sends your topic to an article generation service \
                 and shows what comes back."
                    .to_string(),
                String::new(),
                "Enter submits the prompt, Shift+Enter adds a line break.".to_string(),
                "F1-F3 or Tab switch pages, PageUp/PageDown scroll the article.".to_string(),
                "Esc or Ctrl+C quits.".to_string(),
            ],
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            title: "Not Found".to_string(),
            body: vec![
                format!("Nothing lives at {path}."),
                "Use F1-F3 to pick a page.".to_string(),
            ],
        }
    }
}

impl Component for InfoPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::uniform(1));

        let lines: Vec<Line> = self.body.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let width = PAGE_WIDTH.min(area.width);
        let height = (paragraph.line_count(width.saturating_sub(4)) as u16).min(area.height);
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [page] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        frame.render_widget(paragraph, page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(page: &mut InfoPage) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| page.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_not_found_names_path() {
        let text = rendered(&mut InfoPage::not_found("/blog"));
        assert!(text.contains("Not Found"));
        assert!(text.contains("/blog"));
    }

    #[test]
    fn test_about_lists_keys() {
        let text = rendered(&mut InfoPage::about());
        assert!(text.contains("About"));
        assert!(text.contains("Shift+Enter"));
    }
}
