//! Framed dialog drawn over the current view.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Widget},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

// border + padding on each side, plus one line of content
const MIN_HEIGHT: u16 = 5;

/// Bordered dialog that clears the area beneath it and renders its content
/// inside. Sizes are percentages of the parent area.
pub struct Popover<'a> {
    content: &'a dyn CustomWidgetRef,
    label: Option<String>,
    border_color: Option<Color>,
    width: u16,
    height: u16,
}

impl<'a> Popover<'a> {
    pub fn new(content: &'a dyn CustomWidgetRef) -> Self {
        Self {
            content,
            label: None,
            border_color: None,
            width: 50,
            height: 50,
        }
    }

    /// Centers a `percent_x` by `percent_y` box in `area`, never shorter
    /// than a frame with one line of content.
    pub fn centered_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let scaled = u32::from(area.height) * u32::from(percent_y) / 100;
        let height = u16::try_from(scaled)
            .unwrap_or(area.height)
            .max(MIN_HEIGHT)
            .min(area.height);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
            .flex(Flex::Center)
            .areas(area);
        area
    }

    /// Text set into the top border.
    pub fn label<T: Into<String>>(mut self, label: T) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn width(mut self, w: u16) -> Self {
        self.width = w;
        self
    }

    pub fn height(mut self, h: u16) -> Self {
        self.height = h;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

impl<'a> CustomWidgetRef for Popover<'a> {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let colors = &ctx.state.colors;
        let pop_area = Self::centered_area(area, self.width, self.height);
        let border_color = self.border_color.unwrap_or(colors.border_color);

        let mut block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(border_color).bg(colors.buffer_bg))
            .padding(Padding::uniform(1))
            .style(Style::default().bg(colors.buffer_bg));

        if let Some(label) = self.label.as_ref() {
            block = block.title(Line::from(format!(" {label} ")).centered());
        }

        let inner_area = block.inner(pop_area);

        Clear.render(pop_area, buf);
        block.render(pop_area, buf);
        self.content.render_ref(inner_area, buf, ctx)
    }
}

#[cfg(test)]
#[path = "./base_tests.rs"]
mod tests;
