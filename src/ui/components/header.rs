//! Header component for section titles.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Bold styled section header.
pub struct Header {
    title: String,
    centered: bool,
}

impl Header {
    /// Creates a new header with the given title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            centered: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

impl CustomWidget for Header {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let header_style = Style::default()
            .fg(ctx.state.colors.header_text)
            .add_modifier(Modifier::BOLD);

        let mut header =
            Paragraph::new(Line::from(self.title.as_str())).style(header_style);

        if self.centered {
            header = header.centered();
        }

        header.render(area, buf)
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
