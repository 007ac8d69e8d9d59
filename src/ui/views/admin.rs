//! Hidden administration panel listing stored registrations.

use std::{cell::RefCell, rc::Rc};

use color_eyre::eyre::Result;
use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::{
    registration::Registration,
    ui::{
        components::{
            header::Header,
            table::{DEFAULT_ITEM_HEIGHT, Table},
        },
        store::{
            Dispatcher,
            action::Action,
            state::{Confirm, State, ViewID},
        },
    },
};

use super::traits::{
    CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

const TITLE: &str = "Panel de Administración - Registros";
const EMPTY: &str = "No hay registros guardados";

pub struct AdminView {
    dispatcher: Rc<dyn Dispatcher>,
    table: RefCell<Table>,
}

impl AdminView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            table: RefCell::new(Table::new(
                Vec::new(),
                Some(vec![
                    "ID".to_string(),
                    "Nombre".to_string(),
                    "DNI/Código".to_string(),
                    "Carrera/Empresa".to_string(),
                    "Tipo".to_string(),
                    "Correo".to_string(),
                    "Fecha".to_string(),
                ]),
                vec![13, 22, 12, 20, 14, 24, 20],
                DEFAULT_ITEM_HEIGHT,
            )),
        }
    }

    /// Keeps the table rows in step with the stored collection and makes sure
    /// a row is selected whenever there is one.
    fn sync_table(&self, state: &State) {
        let items = state.registrations.iter().map(table_row).collect_vec();
        let mut table = self.table.borrow_mut();

        if table.update_items(items).is_none() {
            table.next();
        }
    }

    fn selected<'a>(&self, state: &'a State) -> Option<&'a Registration> {
        self.table
            .borrow()
            .selected()
            .and_then(|i| state.registrations.get(i))
    }

    fn request_delete(&self, state: &State) {
        if let Some(registration) = self.selected(state) {
            self.dispatcher.dispatch(Action::RequestConfirm(
                Confirm::DeleteRegistration(registration.id.clone()),
            ));
        }
    }

    fn request_clear(&self, state: &State) {
        if !state.registrations.is_empty() {
            self.dispatcher
                .dispatch(Action::RequestConfirm(Confirm::ClearAll));
        }
    }
}

fn table_row(r: &Registration) -> Vec<String> {
    vec![
        r.short_id(),
        r.name.clone(),
        r.id_code.clone(),
        r.affiliation.clone(),
        r.participant_type.clone(),
        r.email.clone(),
        r.display_date(),
    ]
}

impl View for AdminView {
    fn id(&self) -> ViewID {
        ViewID::Admin
    }

    fn legend(&self, _state: &State) -> &str {
        "(↑/↓) seleccionar | (d) eliminar | (x) exportar CSV | (c) eliminar todo | (r) recargar | (esc) volver | (q) salir"
    }
}

impl CustomWidgetRef for AdminView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let [title_area, total_area, table_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(3),
        ])
        .areas(area);

        Header::new(TITLE).render(title_area, buf, ctx);

        Paragraph::new(format!(
            "Total de registros: {}",
            ctx.state.registrations.len()
        ))
        .style(Style::new().fg(ctx.state.colors.text))
        .render(total_area, buf);

        if ctx.state.registrations.is_empty() {
            Paragraph::new(EMPTY)
                .style(Style::new().fg(ctx.state.colors.light_gray))
                .centered()
                .render(table_area, buf);
            return Ok(());
        }

        self.sync_table(ctx.state);
        self.table.borrow().render_ref(table_area, buf, ctx)
    }
}

impl EventHandler for AdminView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        self.sync_table(ctx.state);

        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.table.borrow_mut().next();
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.table.borrow_mut().previous();
                    handled = true;
                }
                KeyCode::Char('d') => {
                    self.request_delete(ctx.state);
                    handled = true;
                }
                KeyCode::Char('x') => {
                    self.dispatcher.dispatch(Action::ExportCsv);
                    handled = true;
                }
                KeyCode::Char('c') => {
                    self.request_clear(ctx.state);
                    handled = true;
                }
                KeyCode::Char('r') => {
                    self.dispatcher.dispatch(Action::ReloadRegistrations);
                    handled = true;
                }
                KeyCode::Esc => {
                    self.dispatcher.dispatch(Action::CloseAdmin);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./admin_tests.rs"]
mod tests;
