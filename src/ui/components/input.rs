//! Editable text input component.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

const CURSOR: &str = "█";

/// State for an input field (editing mode and current value).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

/// Bordered text input titled with its label. The border highlights while
/// the input is being edited and a placeholder is shown while it is empty.
pub struct Input {
    label: String,
    placeholder: Option<String>,
}

impl Input {
    /// Creates a new input with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(String::from(placeholder));
        self
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        let border_color = if state.editing {
            colors.input_editing
        } else {
            colors.border_color
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border_color))
            .title(Line::from(format!(" {} ", self.label)));

        let mut spans =
            vec![Span::from(state.value.as_str()).style(Style::new().fg(colors.text))];

        if state.editing {
            spans.push(Span::from(CURSOR).style(Style::new().fg(colors.input_editing)));
        }

        if state.value.is_empty()
            && let Some(placeholder) = self.placeholder.as_ref()
        {
            spans.push(
                Span::from(placeholder.as_str()).style(Style::new().fg(colors.light_gray)),
            );
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
