//! Pure reducer functions that compute new state from actions.

use crate::ui::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

pub mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        log::debug!("processing action: {action:?}");

        match action {
            // UI actions
            Action::SetError(err) => {
                reducers::ui::set_error(state, err);
                Effect::None
            }
            Action::SetAlert(alert) => {
                reducers::ui::set_alert(state, alert);
                Effect::None
            }

            // Form actions
            Action::InputChar(c) => {
                reducers::form::input_char(state, c);
                Effect::None
            }
            Action::DeleteChar => {
                reducers::form::delete_char(state);
                Effect::None
            }
            Action::FocusNext => {
                reducers::form::focus_next(state);
                Effect::None
            }
            Action::FocusPrevious => {
                reducers::form::focus_previous(state);
                Effect::None
            }
            Action::SubmitRegistration(registration) => {
                Effect::SaveRegistration(registration)
            }
            Action::RegistrationSaved(registrations, at) => {
                reducers::form::registration_saved(state, registrations, at);
                Effect::None
            }
            Action::DismissSuccessModal => {
                reducers::form::dismiss_success_modal(state);
                Effect::None
            }

            // Admin actions
            Action::OpenAdmin => {
                reducers::admin::open_admin(state);
                Effect::LoadRegistrations
            }
            Action::CloseAdmin => {
                reducers::admin::close_admin(state);
                Effect::None
            }
            Action::ReloadRegistrations => Effect::LoadRegistrations,
            Action::SetRegistrations(registrations) => {
                reducers::admin::set_registrations(state, registrations);
                Effect::None
            }
            Action::ExportCsv => reducers::admin::export_csv(state),
            Action::RequestConfirm(confirm) => {
                reducers::admin::request_confirm(state, confirm);
                Effect::None
            }
            Action::CancelConfirm => {
                reducers::admin::cancel_confirm(state);
                Effect::None
            }
            Action::AcceptConfirm => reducers::admin::accept_confirm(state),
            Action::RegistrationsCleared => {
                reducers::admin::registrations_cleared(state);
                Effect::None
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
