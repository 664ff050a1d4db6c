use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the screen.
///
/// Page widgets are rebuilt every frame from `App` data; `&mut self` lets a
/// widget remember what it laid out (the nav bar keeps its tab rects).
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw terminal input into a widget-level event.
pub trait EventHandler {
    type Event;

    /// `None` when the widget has no interest in `event`.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
