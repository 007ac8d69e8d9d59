//! Application state definitions.

use core::fmt;
use std::time::Instant;

use crate::{
    config::Config,
    registration::{FormField, Registration, RegistrationForm},
    ui::colors::{Colors, Theme},
};

/// Identifies the currently active view.
#[derive(Debug, Copy, Clone, Default, Eq, Hash, PartialEq)]
pub enum ViewID {
    Main,
    #[default]
    Form,
    Admin,
}

impl fmt::Display for ViewID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Destructive admin operations waiting for the user to confirm.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Confirm {
    DeleteRegistration(String),
    ClearAll,
}

impl Confirm {
    /// Question shown in the confirmation popover.
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirm::DeleteRegistration(_) => {
                "¿Estás seguro de que quieres eliminar este registro?"
            }
            Confirm::ClearAll => {
                "¿Estás seguro de que quieres eliminar todos los registros? Esta acción no se puede deshacer."
            }
        }
    }
}

/// Complete application state for the terminal UI.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub colors: Colors,
    pub config: Config,
    pub view_id: ViewID,
    /// Storage failures, rendered in the error popover
    pub error: Option<String>,
    /// Blocking informational message
    pub alert: Option<String>,
    pub form: RegistrationForm,
    pub focus: FormField,
    /// Set while the confirmation modal is visible to the instant it opened
    pub success_modal: Option<Instant>,
    pub registrations: Vec<Registration>,
    pub pending_confirm: Option<Confirm>,
}

impl State {
    /// Creates the initial state for the given config.
    pub fn new(config: Config, true_color_enabled: bool) -> Self {
        let theme = Theme::from_string(&config.theme);
        let colors =
            Colors::new(theme.to_palette(true_color_enabled), true_color_enabled);

        Self {
            colors,
            config,
            ..Default::default()
        }
    }
}
