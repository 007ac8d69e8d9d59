//! Admin panel reducers: listing, export, and deletion.

use crate::{
    registration::Registration,
    ui::store::{
        effect::Effect,
        state::{Confirm, State, ViewID},
    },
};

pub const NO_RECORDS_TO_EXPORT: &str = "No hay registros para descargar";
pub const ALL_RECORDS_DELETED: &str = "Todos los registros han sido eliminados";

pub fn open_admin(state: &mut State) {
    state.view_id = ViewID::Admin;
}

pub fn close_admin(state: &mut State) {
    state.view_id = ViewID::Form;
    state.pending_confirm = None;
}

/// Replaces the displayed collection with what is currently stored.
pub fn set_registrations(state: &mut State, registrations: Vec<Registration>) {
    state.registrations = registrations;
}

/// Requests a CSV export of the displayed collection, or alerts when there is
/// nothing to export.
pub fn export_csv(state: &mut State) -> Effect {
    if state.registrations.is_empty() {
        state.alert = Some(NO_RECORDS_TO_EXPORT.to_string());
        return Effect::None;
    }

    Effect::ExportCsv(state.registrations.clone())
}

pub fn request_confirm(state: &mut State, confirm: Confirm) {
    state.pending_confirm = Some(confirm);
}

pub fn cancel_confirm(state: &mut State) {
    state.pending_confirm = None;
}

/// Carries out the pending destructive operation, if any.
pub fn accept_confirm(state: &mut State) -> Effect {
    match state.pending_confirm.take() {
        Some(Confirm::DeleteRegistration(id)) => Effect::DeleteRegistration(id),
        Some(Confirm::ClearAll) => Effect::ClearRegistrations,
        None => Effect::None,
    }
}

pub fn registrations_cleared(state: &mut State) {
    state.registrations.clear();
    state.alert = Some(ALL_RECORDS_DELETED.to_string());
}
