//! Cursor position and internal scroll tracking for the prompt box.
//!
//! The text itself is owned by `InputBox`; every method takes `buffer: &str`.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::text_wrap::{
    BORDER_OFFSET, LEFT_PADDING, MAX_VISIBLE_LINES, inner_width, wrap_line_count, wrap_options,
};

pub(super) struct CursorState {
    /// Byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Wrapped line (0-based) the cursor sits on.
    pub fn line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }
        wrap_line_count(&buffer[..self.pos], width).saturating_sub(1)
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let total_lines = wrap_line_count(buffer, inner_width(content_width));
        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.line(buffer, content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let origin = (area.x + BORDER_OFFSET + LEFT_PADDING, area.y + BORDER_OFFSET);
        let width = inner_width(area.width);
        if width == 0 {
            return origin;
        }

        let before = &buffer[..self.pos];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[line_start..];

        // textwrap trims whitespace at segment ends, so measure the tail of the
        // logical line against what earlier segments consumed.
        let segments = textwrap::wrap(logical, wrap_options(width));
        let consumed: usize = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|seg| seg.width())
            .sum();
        let column = (logical.width().saturating_sub(consumed) as u16).min(width);

        let row = self.line(buffer, area.width).saturating_sub(self.scroll_offset);
        (origin.0 + column, origin.1 + row)
    }
}
