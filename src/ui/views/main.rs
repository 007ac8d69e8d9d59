//! Top level view: header, active sub view, legend, and popovers.

use std::{collections::HashMap, rc::Rc};

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Padding, Widget},
};

use crate::ui::{
    components::{
        footer::InfoFooter,
        header::Header,
        popover::{base::Popover, simple::SimplePopover},
    },
    store::{
        Dispatcher,
        action::Action,
        state::{State, ViewID},
    },
};

use super::{
    admin::AdminView,
    form::FormView,
    traits::{
        CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
    },
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);

pub const SUCCESS_TITLE: &str = "¡Bienvenido/a!";
pub const SUCCESS_MESSAGE: &str = "Tu registro se completó correctamente.";

pub struct MainView {
    dispatcher: Rc<dyn Dispatcher>,
    sub_views: HashMap<ViewID, Box<dyn View>>,
}

impl MainView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        let mut sub_views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let form = Box::new(FormView::new(Rc::clone(&dispatcher)));
        let admin = Box::new(AdminView::new(Rc::clone(&dispatcher)));

        sub_views.insert(form.id(), form);
        sub_views.insert(admin.id(), admin);

        Self {
            dispatcher,
            sub_views,
        }
    }

    fn render_buffer_bg(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &State,
    ) {
        let block = Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .padding(DEFAULT_PADDING);
        block.render(area, buf);
    }

    fn render_top(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        Header::new(ctx.state.config.event_name.as_str())
            .centered()
            .render(inner_area, buf, ctx);
    }

    fn render_middle_view(
        &self,
        view: &dyn View,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        view.render_ref(inner_area, buf, ctx)
    }

    fn render_popovers(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let state = ctx.state;

        if state.success_modal.is_some() {
            let content = SimplePopover::new(SUCCESS_MESSAGE)
                .title(SUCCESS_TITLE)
                .footer("(enter) cerrar")
                .centered();
            Popover::new(&content)
                .width(50)
                .height(30)
                .border_color(state.colors.success)
                .render_ref(area, buf, ctx)?;
        }

        if let Some(confirm) = state.pending_confirm.as_ref() {
            let content = SimplePopover::new(confirm.prompt())
                .title("Confirmar")
                .footer("(enter/y) confirmar | (esc/n) cancelar")
                .centered();
            Popover::new(&content)
                .width(60)
                .height(30)
                .render_ref(area, buf, ctx)?;
        }

        if let Some(alert) = state.alert.as_ref() {
            let content = SimplePopover::new(alert.as_str())
                .footer("(enter) aceptar")
                .centered();
            Popover::new(&content)
                .width(50)
                .height(25)
                .render_ref(area, buf, ctx)?;
        }

        // errors layer on top of everything else
        if let Some(err) = state.error.as_ref() {
            let content = SimplePopover::new(err.as_str())
                .footer("(enter) cerrar")
                .centered();
            Popover::new(&content)
                .label("Error")
                .width(50)
                .height(40)
                .border_color(state.colors.error)
                .render_ref(area, buf, ctx)?;
        }

        Ok(())
    }

    /// Blocking overlays swallow every event until dismissed.
    fn process_overlay_event(
        &self,
        evt: &CrossTermEvent,
        state: &State,
    ) -> bool {
        let key = match evt {
            CrossTermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Some(key.code)
            }
            _ => None,
        };

        if state.error.is_some() {
            if key == Some(KeyCode::Enter) {
                self.dispatcher.dispatch(Action::SetError(None));
            }
            return true;
        }

        if state.alert.is_some() {
            if matches!(key, Some(KeyCode::Enter | KeyCode::Esc)) {
                self.dispatcher.dispatch(Action::SetAlert(None));
            }
            return true;
        }

        if state.pending_confirm.is_some() {
            match key {
                Some(KeyCode::Enter | KeyCode::Char('y')) => {
                    self.dispatcher.dispatch(Action::AcceptConfirm)
                }
                Some(KeyCode::Esc | KeyCode::Char('n')) => {
                    self.dispatcher.dispatch(Action::CancelConfirm)
                }
                _ => {}
            }
            return true;
        }

        if state.success_modal.is_some() {
            if matches!(key, Some(KeyCode::Enter | KeyCode::Esc)) {
                self.dispatcher.dispatch(Action::DismissSuccessModal);
            }
            return true;
        }

        false
    }
}

impl View for MainView {
    fn id(&self) -> ViewID {
        ViewID::Main
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        // consists of 3 vertical rectangles (top, middle, bottom)
        let [top_area, middle_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .areas(area);

        let view_id = ctx.state.view_id;
        let view = self
            .sub_views
            .get(&view_id)
            .ok_or_else(|| eyre!("no view registered for {view_id}"))?;

        // render background for entire display
        self.render_buffer_bg(area, buf, ctx.state);
        self.render_top(top_area, buf, ctx);
        self.render_middle_view(view.as_ref(), middle_area, buf, ctx)?;
        InfoFooter::new(view.legend(ctx.state).to_string())
            .render(footer_area, buf, ctx);

        // important to render popovers last so they properly layer on top
        self.render_popovers(ctx.app_area, buf, ctx)
    }
}

impl EventHandler for MainView {
    fn process_event(
        &self,
        evt: &CrossTermEvent,
        ctx: &CustomWidgetContext,
    ) -> bool {
        if self.process_overlay_event(evt, ctx.state) {
            return true;
        }

        if let CrossTermEvent::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::F(12)
            && ctx.state.view_id == ViewID::Form
        {
            self.dispatcher.dispatch(Action::OpenAdmin);
            return true;
        }

        self.sub_views
            .get(&ctx.state.view_id)
            .is_some_and(|view| view.process_event(evt, ctx))
    }
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
