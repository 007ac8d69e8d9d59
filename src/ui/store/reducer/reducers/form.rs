//! Registration form reducers.

use std::time::Instant;

use crate::{
    registration::{FormField, Registration, RegistrationForm},
    ui::store::state::State,
};

/// Appends a character to the focused field.
pub fn input_char(state: &mut State, c: char) {
    if c.is_control() {
        return;
    }
    state.form.value_mut(state.focus).push(c);
}

/// Removes the last character of the focused field.
pub fn delete_char(state: &mut State) {
    state.form.value_mut(state.focus).pop();
}

pub fn focus_next(state: &mut State) {
    state.focus = state.focus.next();
}

pub fn focus_previous(state: &mut State) {
    state.focus = state.focus.previous();
}

/// A registration was persisted: clears the form and opens the success
/// modal.
pub fn registration_saved(
    state: &mut State,
    registrations: Vec<Registration>,
    at: Instant,
) {
    state.registrations = registrations;
    state.form = RegistrationForm::default();
    state.focus = FormField::default();
    state.success_modal = Some(at);
}

pub fn dismiss_success_modal(state: &mut State) {
    state.success_modal = None;
}
