//! UI state reducers for errors and alerts.

use crate::ui::store::state::State;

/// Sets or clears the current error message.
pub fn set_error(state: &mut State, err: Option<String>) {
    state.error = err;
}

/// Sets or clears the blocking alert message.
pub fn set_alert(state: &mut State, alert: Option<String>) {
    state.alert = alert;
}
