//! Attendee registration form.

use std::rc::Rc;

use color_eyre::eyre::Result;
use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use strum::IntoEnumIterator;

use crate::{
    registration::{FormField, Registration, VALIDATION_PROMPT},
    ui::{
        components::{
            header::Header,
            input::{Input, InputState},
        },
        store::{
            Dispatcher,
            action::Action,
            state::{State, ViewID},
        },
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef,
    EventHandler, View,
};

const TITLE: &str = "¡Bienvenidos!";
const SUBTITLE: &str = "Ingresa tus datos para registrarte";
const SUBMIT: &str = "[ Registrar ]";
const INPUT_HEIGHT: u16 = 3;

/// Renders the five registration inputs and turns key presses into form
/// actions.
pub struct FormView {
    dispatcher: Rc<dyn Dispatcher>,
}

impl FormView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    fn submit(&self, state: &State) {
        match state.form.validate() {
            Ok(()) => {
                let registration = Registration::new(state.form.clone());
                self.dispatcher
                    .dispatch(Action::SubmitRegistration(registration));
            }
            Err(e) => {
                log::debug!("rejected registration: {e}");
                self.dispatcher
                    .dispatch(Action::SetAlert(Some(VALIDATION_PROMPT.to_string())));
            }
        }
    }

    fn render_header(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [title_area, subtitle_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                .areas(area);

        Header::new(TITLE).centered().render(title_area, buf, ctx);
        Paragraph::new(SUBTITLE)
            .style(Style::new().fg(ctx.state.colors.light_gray))
            .centered()
            .render(subtitle_area, buf);
    }

    fn render_inputs(
        &self,
        areas: &[Rect],
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        for (field, area) in FormField::iter().zip(areas.iter()) {
            let mut state = InputState {
                editing: ctx.state.focus == field,
                value: ctx.state.form.value(field).to_string(),
            };

            Input::new(field.label())
                .placeholder(field.placeholder())
                .render(*area, buf, &mut state, ctx);
        }
    }
}

impl View for FormView {
    fn id(&self) -> ViewID {
        ViewID::Form
    }

    fn legend(&self, _state: &State) -> &str {
        "(tab/↓) siguiente | (shift+tab/↑) anterior | (enter) registrar | (ctrl+c) salir"
    }
}

impl CustomWidgetRef for FormView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let constraints = [Constraint::Length(3)]
            .into_iter()
            .chain(FormField::iter().map(|_| Constraint::Length(INPUT_HEIGHT)))
            .chain([Constraint::Length(2), Constraint::Min(0)])
            .collect_vec();

        let areas = Layout::vertical(constraints).split(area);
        let field_count = FormField::iter().count();

        self.render_header(areas[0], buf, ctx);
        self.render_inputs(&areas[1..=field_count], buf, ctx);

        let submit = Paragraph::new(Line::from(SUBMIT))
            .style(
                Style::new()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            )
            .centered();
        submit.render(areas[field_count + 1], buf);

        Ok(())
    }
}

impl EventHandler for FormView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        match evt {
            Event::FocusGained => {}
            Event::FocusLost => {}
            Event::Mouse(_m) => {}
            Event::Resize(_x, _y) => {}
            Event::Paste(s) => {
                s.chars()
                    .filter(|c| !c.is_control())
                    .for_each(|c| self.dispatcher.dispatch(Action::InputChar(c)));
                handled = true;
            }
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char(c)
                            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            self.dispatcher.dispatch(Action::InputChar(c));
                            handled = true;
                        }
                        KeyCode::Backspace => {
                            self.dispatcher.dispatch(Action::DeleteChar);
                            handled = true;
                        }
                        KeyCode::Tab | KeyCode::Down => {
                            self.dispatcher.dispatch(Action::FocusNext);
                            handled = true;
                        }
                        KeyCode::BackTab | KeyCode::Up => {
                            self.dispatcher.dispatch(Action::FocusPrevious);
                            handled = true;
                        }
                        KeyCode::Enter => {
                            self.submit(ctx.state);
                            handled = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./form_tests.rs"]
mod tests;
