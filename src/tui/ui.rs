use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::nav::{NAV_ITEMS, Page};
use crate::core::state::App;
use crate::generation::BackendStatus;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::NAV_BAR_HEIGHT;
use crate::tui::components::send_button::{SEND_BUTTON_HEIGHT, SEND_BUTTON_WIDTH};
use crate::tui::components::title_bar::TITLE_BAR_HEIGHT;
use crate::tui::components::{ArticlePanel, InfoPage, LandingPage, NavBar, SendButton, TitleBar};

/// The writer column never grows wider than this
const WRITER_MAX_WIDTH: u16 = 110;
pub const HINT: &str = "Press Enter to generate or click the send button";
const FORM_TITLE: &str = " ✎ What would you like to write about? ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [nav_area, page_area] =
        Layout::vertical([Length(NAV_BAR_HEIGHT), Min(0)]).areas(frame.area());

    let mut nav_bar = NavBar::new(NAV_ITEMS, &app.location);
    nav_bar.render(frame, nav_area);
    tui.nav_regions = nav_bar.regions;
    tui.send_button_area = None;

    match app.page() {
        Page::Home => LandingPage::new(app.backend).render(frame, page_area),
        Page::Writer => draw_writer(frame, page_area, app, tui, spinner_frame),
        Page::About => InfoPage::about().render(frame, page_area),
        Page::NotFound => InfoPage::not_found(&app.location).render(frame, page_area),
    }
}

fn draw_writer(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let width = area.width.min(WRITER_MAX_WIDTH);
    let [column] = Layout::horizontal([Length(width)]).flex(Flex::Center).areas(area);

    // Form block: borders (2) + prompt box + hint line (1)
    let input_width = width.saturating_sub(2 + SEND_BUTTON_WIDTH + 1);
    let input_height = tui.input_box.calculate_height(input_width);
    let form_height = input_height + 3;

    let [title_area, _, form_area, _, article_area] = Layout::vertical([
        Length(TITLE_BAR_HEIGHT),
        Length(1),
        Length(form_height),
        Length(1),
        Min(0),
    ])
    .areas(column);

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    let form_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
        .title(Line::styled(
            FORM_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    let form_inner = form_block.inner(form_area);
    frame.render_widget(form_block, form_area);

    let [input_row, hint_area] =
        Layout::vertical([Length(input_height), Length(1)]).areas(form_inner);
    let [input_area, _, button_column] =
        Layout::horizontal([Min(0), Length(1), Length(SEND_BUTTON_WIDTH)]).areas(input_row);

    tui.input_box.disabled = app.form.pending;
    tui.input_box.render(frame, input_area);

    // Button sits at the bottom of the prompt box
    let button_area = Rect {
        y: button_column.bottom().saturating_sub(SEND_BUTTON_HEIGHT),
        height: SEND_BUTTON_HEIGHT.min(button_column.height),
        ..button_column
    };
    SendButton {
        enabled: app.form.can_submit(),
        pending: app.form.pending,
        spinner_frame,
    }
    .render(frame, button_area);
    tui.send_button_area = Some(button_area);

    frame.render_widget(Paragraph::new(hint_line(app.backend)), hint_area);

    if app.form.shows_result() {
        ArticlePanel {
            state: &mut tui.article,
            result: &app.form.result,
            pending: app.form.pending,
            spinner_frame,
        }
        .render(frame, article_area);
    }
}

fn hint_line(backend: BackendStatus) -> Line<'static> {
    let dot_color = match backend {
        BackendStatus::Online => Color::Green,
        BackendStatus::Offline => Color::Red,
        BackendStatus::Unknown => Color::DarkGray,
    };
    Line::from(vec![
        Span::styled(" ● ", Style::default().fg(dot_color)),
        Span::styled(HINT, Style::default().fg(Color::Gray)),
        Span::styled(
            format!("  (backend {})", backend.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
    }

    fn text_of(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_writer_page_layout() {
        let app = test_app();
        let mut tui = TuiState::new();
        let terminal = draw(&app, &mut tui);
        let text = text_of(&terminal);

        assert!(text.contains("What would you like to write about?"));
        assert!(text.contains(HINT));
        assert!(!text.contains("Generated Article"));
        assert_eq!(tui.nav_regions.len(), NAV_ITEMS.len());
        assert!(tui.send_button_area.is_some());
    }

    #[test]
    fn test_send_button_disabled_while_pending() {
        let mut app = test_app();
        update(&mut app, Action::UpdatePrompt("Rust".to_string()));
        let mut tui = TuiState::new();

        let terminal = draw(&app, &mut tui);
        let button = tui.send_button_area.unwrap();
        assert_eq!(
            terminal.backend().buffer()[(button.x + 1, button.y + 1)].bg,
            Color::Magenta
        );

        update(&mut app, Action::Submit);
        let terminal = draw(&app, &mut tui);
        let button = tui.send_button_area.unwrap();
        assert_eq!(
            terminal.backend().buffer()[(button.x + 1, button.y + 1)].bg,
            Color::DarkGray
        );
        assert!(tui.input_box.disabled);
        assert!(text_of(&terminal).contains("Generated Article"));
    }

    #[test]
    fn test_result_shown_after_completion() {
        let mut app = test_app();
        update(&mut app, Action::UpdatePrompt("Rust".to_string()));
        update(&mut app, Action::Submit);
        let form_id = app.form_id;
        update(
            &mut app,
            Action::GenerationFinished {
                form_id,
                result: Ok(Some("An article about Rust.".to_string())),
            },
        );
        let mut tui = TuiState::new();
        let text = text_of(&draw(&app, &mut tui));
        assert!(text.contains("An article about Rust."));
    }

    #[test]
    fn test_other_pages_have_no_send_button() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        for path in ["/", "/about", "/nowhere"] {
            update(&mut app, Action::Navigate(path.to_string()));
            draw(&app, &mut tui);
            assert!(tui.send_button_area.is_none(), "path {path}");
        }
    }
}
