use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

/// Popover body: an optional bold title, a wrapped message, and an optional
/// footer line pinned to the bottom.
pub struct SimplePopover {
    title: Option<String>,
    message: String,
    footer: Option<String>,
    centered: bool,
}

impl SimplePopover {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            title: None,
            message: message.into(),
            footer: None,
            centered: false,
        }
    }

    pub fn title<T: Into<String>>(mut self, t: T) -> Self {
        self.title = Some(t.into());
        self
    }

    pub fn footer<F: Into<String>>(mut self, f: F) -> Self {
        self.footer = Some(f.into());
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    fn paragraph<'a>(&self, p: Paragraph<'a>) -> Paragraph<'a> {
        if self.centered { p.centered() } else { p }
    }
}

impl CustomWidgetRef for SimplePopover {
    fn render_ref(
        &self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let [title_area, msg_area, footer_area] = Layout::vertical([
            Constraint::Length(if self.title.is_some() { 2 } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(if self.footer.is_some() { 1 } else { 0 }),
        ])
        .areas(area);

        if let Some(title) = self.title.as_ref() {
            let title = Paragraph::new(Line::from(title.as_str())).style(
                Style::new()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            );
            self.paragraph(title).render(title_area, buf);
        }

        let msg = Paragraph::new(self.message.as_str())
            .style(Style::new().fg(ctx.state.colors.text))
            .wrap(Wrap { trim: true });
        self.paragraph(msg).render(msg_area, buf);

        if let Some(footer_msg) = self.footer.as_ref() {
            let footer = Paragraph::new(footer_msg.as_str())
                .style(Style::new().fg(ctx.state.colors.light_gray));
            self.paragraph(footer).render(footer_area, buf);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "./simple_tests.rs"]
mod tests;
