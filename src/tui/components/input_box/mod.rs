//! # InputBox Component
//!
//! The prompt textarea of the writer form.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace/delete, cursor movement)
//! - Forward Enter as a submit request
//! - Show a placeholder while empty
//! - Ignore edits while disabled (a request is pending)
//!
//! ## State Management
//!
//! The buffer is internal state mirrored into the core `FormState` through
//! `InputEvent::ContentChanged`. `disabled` is a prop from the application
//! state. Unlike a chat input, the buffer is kept after submission.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    LEFT_PADDING, MAX_VISIBLE_LINES, MIN_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width,
    line_bounds, next_char_boundary, prev_char_boundary, wrap_line_count, wrap_options,
};

pub const PLACEHOLDER: &str =
    "Enter your article topic or idea... (example: Artificial Intelligence)";

fn wrap_to_string(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    textwrap::wrap(text, wrap_options(width)).join("\n")
}

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User asked to submit (Enter pressed)
    Submit,
    /// Buffer text changed
    ContentChanged,
    /// Only the cursor moved
    CursorMoved,
}

/// Multi-line prompt input.
///
/// # Props
///
/// - `disabled`: true while a request is pending
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position and scroll offset
pub struct InputBox {
    pub buffer: String,
    pub disabled: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: CursorState::new(),
        }
    }

    /// Clear the buffer (the form was discarded).
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    /// Required height for the current buffer, clamped to
    /// [MIN_VISIBLE_LINES, MAX_VISIBLE_LINES] plus borders.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let lines = wrap_line_count(&self.buffer, inner_width(content_width));
        lines.clamp(MIN_VISIBLE_LINES, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Pre-wrapped lines currently inside the scroll window.
    fn visible_text(&self, content_width: u16) -> String {
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }
        textwrap::wrap(&self.buffer, wrap_options(width))
            .iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(MAX_VISIBLE_LINES as usize)
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join("\n")
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
        Some(InputEvent::ContentChanged)
    }

    fn move_to(&mut self, pos: usize) -> Option<InputEvent> {
        (self.cursor.pos != pos).then(|| {
            self.cursor.pos = pos;
            InputEvent::CursorMoved
        })
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Magenta)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(LEFT_PADDING));

        let (text, style) = if self.buffer.is_empty() {
            let placeholder = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
            (wrap_to_string(PLACEHOLDER, inner_width(area.width)), placeholder)
        } else if self.disabled {
            (self.visible_text(area.width), Style::default().fg(Color::Gray))
        } else {
            (self.visible_text(area.width), Style::default().fg(Color::White))
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if !self.disabled {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if matches!(event, TuiEvent::Submit) {
            return Some(InputEvent::Submit);
        }
        if self.disabled {
            return None;
        }

        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.move_to(prev)
            }
            TuiEvent::CursorRight => {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.move_to(next)
            }
            TuiEvent::CursorHome => {
                let (start, _) = line_bounds(&self.buffer, self.cursor.pos);
                self.move_to(start)
            }
            TuiEvent::CursorEnd => {
                let (_, end) = line_bounds(&self.buffer, self.cursor.pos);
                self.move_to(end)
            }
            _ => None,
        }
    }
}
