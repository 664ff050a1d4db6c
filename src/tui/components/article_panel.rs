//! # ArticlePanel Component
//!
//! Shows the generated article, or a shimmering skeleton while a request is
//! pending.
//!
//! `ArticlePanel` is a transient component (created each frame) wrapping
//! `&'a mut ArticlePanelState` (persistent scroll state) and the form's
//! result text (props). Whitespace in the article is preserved: lines wrap
//! without trimming.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::send_button::spinner;
use crate::tui::event::TuiEvent;

pub const PANEL_TITLE: &str = " ✎ Generated Article ";
/// Skeleton bar widths as a percentage of the content width
const SKELETON_WIDTHS: [u16; 4] = [100, 100, 100, 60];
/// Width of the bright band sweeping across skeleton bars
const SHIMMER_BAND: usize = 8;
const PAGE_SCROLL_LINES: u16 = 10;

/// Scroll state for the article view. Reset whenever a new request starts.
#[derive(Default)]
pub struct ArticlePanelState {
    pub scroll_state: ScrollViewState,
}

impl ArticlePanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_state.set_offset(Position::new(0, 0));
    }

    fn scroll_by(&mut self, delta: i32) {
        let offset = self.scroll_state.offset();
        let y = (i32::from(offset.y) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        self.scroll_state.set_offset(Position::new(offset.x, y));
    }
}

impl EventHandler for ArticlePanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-i32::from(PAGE_SCROLL_LINES)),
            TuiEvent::ScrollPageDown => self.scroll_by(i32::from(PAGE_SCROLL_LINES)),
            _ => return None,
        }
        Some(())
    }
}

/// One skeleton bar of `width` cells with a highlight band at a position
/// derived from `frame_index`.
pub fn skeleton_line(width: u16, frame_index: usize) -> Line<'static> {
    let width = width as usize;
    if width == 0 {
        return Line::default();
    }
    let period = width + SHIMMER_BAND;
    let band_start = frame_index % period;
    let base = Style::default().fg(Color::DarkGray);
    let bright = Style::default().fg(Color::Gray);

    let spans: Vec<Span<'static>> = (0..width)
        .map(|col| {
            let in_band = col + SHIMMER_BAND >= band_start && col < band_start;
            Span::styled("█", if in_band { bright } else { base })
        })
        .collect();
    Line::from(spans)
}

pub struct ArticlePanel<'a> {
    pub state: &'a mut ArticlePanelState,
    pub result: &'a str,
    pub pending: bool,
    pub spinner_frame: usize,
}

impl ArticlePanel<'_> {
    fn block(&self) -> Block<'static> {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(Line::styled(
                PANEL_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        if self.pending {
            let spin = Line::from(format!(" {} ", spinner(self.spinner_frame))).right_aligned();
            block = block.title(spin);
        }
        block
    }

    fn render_skeleton(&self, frame: &mut Frame, inner: Rect) {
        let mut lines = Vec::new();
        for (i, percent) in SKELETON_WIDTHS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let width = inner.width.saturating_mul(*percent) / 100;
            lines.push(skeleton_line(width, self.spinner_frame));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_article(&mut self, frame: &mut Frame, inner: Rect) {
        let content_width = inner.width.saturating_sub(1); // scrollbar column
        let paragraph = Paragraph::new(self.result)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        // Clamp so shrinking content never leaves the view past the end
        let max_y = height.saturating_sub(inner.height);
        if self.state.scroll_state.offset().y > max_y {
            self.state.scroll_state.set_offset(Position::new(0, max_y));
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

impl Component for ArticlePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.pending {
            self.render_skeleton(frame, inner);
        } else {
            self.render_article(frame, inner);
        }
    }
}
