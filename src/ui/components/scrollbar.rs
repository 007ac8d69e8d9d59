//! Scrollbar drawn beside the admin table.

use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

const TRACK: &str = "│";
const THUMB: &str = "┃";

/// Vertical scrollbar on the right edge. The thumb is highlighted while a
/// row is selected.
#[derive(Default)]
pub struct ScrollBar {
    active: bool,
}

impl ScrollBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl CustomStatefulWidget for ScrollBar {
    type State = ScrollbarState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        let scroll_area = area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if scroll_area.width < 1 || scroll_area.height < 1 {
            return;
        }

        let colors = &ctx.state.colors;
        let thumb_color = if self.active {
            colors.header_text
        } else {
            colors.border_color
        };

        Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some(TRACK))
            .track_style(Style::new().fg(colors.gray))
            .thumb_symbol(THUMB)
            .thumb_style(Style::new().fg(thumb_color))
            .render(scroll_area, buf, state)
    }
}

#[cfg(test)]
#[path = "./scrollbar_tests.rs"]
mod tests;
