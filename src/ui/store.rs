//! Redux-like state container for the terminal UI.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, path::PathBuf, rc::Rc, time::Instant};

use chrono::Utc;

use crate::{
    error::{ExportError, StorageError},
    export,
    repository::RegistrationRepository,
};

use self::{
    action::Action, effect::Effect, reducer::reducers::admin::NO_RECORDS_TO_EXPORT,
    state::State,
};

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action) -> Effect;
}

/// Centralized state container. Runs the effects returned by the reducer
/// against the registration repository and feeds their outcome back in as
/// actions.
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    repository: RegistrationRepository,
    export_dir: PathBuf,
}

impl Store {
    /// Creates a new store with the given initial state, reducer, and
    /// persistence targets.
    pub fn new(
        initial_state: State,
        reducer: Box<dyn Reducer>,
        repository: RegistrationRepository,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial_state)),
            reducer,
            repository,
            export_dir,
        }
    }

    fn run_effect(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::None => None,
            Effect::SaveRegistration(registration) => {
                Some(match self.repository.append(registration) {
                    Ok(list) => Action::RegistrationSaved(list, Instant::now()),
                    Err(e) => storage_failure("failed to save registration", e),
                })
            }
            Effect::DeleteRegistration(id) => {
                Some(match self.repository.delete(&id) {
                    Ok(list) => Action::SetRegistrations(list),
                    Err(e) => {
                        storage_failure("failed to delete registration", e)
                    }
                })
            }
            Effect::ClearRegistrations => Some(match self.repository.clear() {
                Ok(()) => Action::RegistrationsCleared,
                Err(e) => storage_failure("failed to clear registrations", e),
            }),
            Effect::LoadRegistrations => {
                Some(Action::SetRegistrations(self.repository.load()))
            }
            Effect::ExportCsv(registrations) => {
                let date = Utc::now().date_naive();
                Some(
                    match export::write_csv(
                        &self.export_dir,
                        &registrations,
                        date,
                    ) {
                        Ok(path) => Action::SetAlert(Some(format!(
                            "Registros exportados a {}",
                            path.display()
                        ))),
                        Err(ExportError::Empty) => Action::SetAlert(Some(
                            NO_RECORDS_TO_EXPORT.to_string(),
                        )),
                        Err(e) => {
                            log::error!("failed to export registrations: {e}");
                            Action::SetError(Some(e.to_string()))
                        }
                    },
                )
            }
        }
    }
}

fn storage_failure(context: &str, err: StorageError) -> Action {
    log::error!("{context}: {err}");
    Action::SetError(Some(format!("{context}: {err}")))
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let effect = {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action)
        };

        if let Some(next) = self.run_effect(effect) {
            self.dispatch(next);
        }
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
