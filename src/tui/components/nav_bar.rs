//! # NavBar Component
//!
//! A rounded pill of navigation tabs across the top of every page.
//!
//! ## Responsibilities
//!
//! - Render each `NavItem` as `icon label`
//! - Highlight the single entry whose path equals the current location
//! - Expose the on-screen region of each entry for mouse hit testing
//!
//! Purely presentational: the active entry is derived from props on every
//! render, there is no internal state.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::nav::{self, NavItem};
use crate::tui::component::Component;

/// Total bar height (border + one row of tabs + border)
pub const NAV_BAR_HEIGHT: u16 = 3;
/// The bar never grows wider than this
const MAX_BAR_WIDTH: u16 = 72;
/// Blank columns between tabs
const TAB_GAP: u16 = 1;

/// Navigation bar.
///
/// # Props
///
/// - `items`: the static navigation table
/// - `current_path`: location used to pick the active entry
///
/// `regions` is filled during `render` with each tab's screen rect, in item order.
pub struct NavBar<'a> {
    pub items: &'a [NavItem],
    pub current_path: &'a str,
    pub regions: Vec<Rect>,
}

impl<'a> NavBar<'a> {
    pub fn new(items: &'a [NavItem], current_path: &'a str) -> Self {
        Self {
            items,
            current_path,
            regions: Vec::new(),
        }
    }

    fn tab_label(item: &NavItem) -> String {
        format!("  {} {}  ", item.icon, item.label)
    }

    /// The bar's outer rect: centered, 90% of the width up to `MAX_BAR_WIDTH`.
    pub fn bar_area(area: Rect) -> Rect {
        let width = (area.width.saturating_mul(9) / 10).min(MAX_BAR_WIDTH).max(area.width.min(20));
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y,
            width,
            height: NAV_BAR_HEIGHT.min(area.height),
        }
    }

    /// Screen rect of each tab inside `inner` (the bar's content row).
    /// Tabs are centered; tabs that don't fit are given zero width.
    pub fn tab_regions(items: &[NavItem], inner: Rect) -> Vec<Rect> {
        let widths: Vec<u16> = items
            .iter()
            .map(|item| Self::tab_label(item).width() as u16)
            .collect();
        let total: u16 = widths.iter().sum::<u16>()
            + TAB_GAP * (widths.len().saturating_sub(1) as u16);

        let mut x = inner.x + inner.width.saturating_sub(total) / 2;
        let right = inner.right();
        widths
            .into_iter()
            .map(|w| {
                let width = w.min(right.saturating_sub(x));
                let region = Rect {
                    x,
                    y: inner.y,
                    width,
                    height: inner.height.min(1),
                };
                x = (x + width + TAB_GAP).min(right);
                region
            })
            .collect()
    }
}

/// Index of the tab under the given screen position.
pub fn hit_test(regions: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    regions.iter().position(|r| r.contains(position))
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = Self::bar_area(area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(bar);
        frame.render_widget(block, bar);

        let active = nav::active_index(self.items, self.current_path);
        self.regions = Self::tab_regions(self.items, inner);

        for (index, (item, region)) in self.items.iter().zip(&self.regions).enumerate() {
            let style = if active == Some(index) {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let tab = Paragraph::new(Line::from(Self::tab_label(item))).style(style);
            frame.render_widget(tab, *region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::NAV_ITEMS;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(path: &str) -> (Terminal<TestBackend>, Vec<Rect>) {
        let backend = TestBackend::new(80, NAV_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut regions = Vec::new();
        terminal
            .draw(|f| {
                let mut nav = NavBar::new(NAV_ITEMS, path);
                nav.render(f, f.area());
                regions = nav.regions;
            })
            .unwrap();
        (terminal, regions)
    }

    fn is_highlighted(terminal: &Terminal<TestBackend>, region: Rect) -> bool {
        terminal.backend().buffer()[(region.x, region.y)].bg == Color::Magenta
    }

    #[test]
    fn test_renders_all_labels() {
        let (terminal, _) = render("/");
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        for item in NAV_ITEMS {
            assert!(text.contains(item.label), "missing {}", item.label);
        }
    }

    #[test]
    fn test_only_matching_entry_is_highlighted() {
        for (active, item) in NAV_ITEMS.iter().enumerate() {
            let (terminal, regions) = render(item.path);
            assert_eq!(regions.len(), NAV_ITEMS.len());
            for (index, region) in regions.iter().enumerate() {
                assert_eq!(
                    is_highlighted(&terminal, *region),
                    index == active,
                    "path {} tab {}",
                    item.path,
                    index
                );
            }
        }
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        let (terminal, regions) = render("/services/extra");
        assert!(regions.iter().all(|r| !is_highlighted(&terminal, *r)));
    }

    #[test]
    fn test_regions_do_not_overlap_and_hit_test() {
        let (_, regions) = render("/");
        for pair in regions.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
        for (index, region) in regions.iter().enumerate() {
            assert_eq!(hit_test(&regions, region.x, region.y), Some(index));
        }
        assert_eq!(hit_test(&regions, 0, 0), None);
    }

    #[test]
    fn test_bar_area_is_centered_and_capped() {
        let bar = NavBar::bar_area(Rect::new(0, 0, 200, 10));
        assert_eq!(bar.width, MAX_BAR_WIDTH);
        assert_eq!(bar.x, (200 - MAX_BAR_WIDTH) / 2);
        assert_eq!(bar.height, NAV_BAR_HEIGHT);
    }
}
