//! Action types for state transitions.

use std::time::Instant;

use crate::registration::Registration;

use super::state::Confirm;

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetError(Option<String>),
    SetAlert(Option<String>),

    // form
    InputChar(char),
    DeleteChar,
    FocusNext,
    FocusPrevious,
    SubmitRegistration(Registration),
    RegistrationSaved(Vec<Registration>, Instant),
    DismissSuccessModal,

    // admin
    OpenAdmin,
    CloseAdmin,
    ReloadRegistrations,
    SetRegistrations(Vec<Registration>),
    ExportCsv,
    RequestConfirm(Confirm),
    CancelConfirm,
    AcceptConfirm,
    RegistrationsCleared,
}
