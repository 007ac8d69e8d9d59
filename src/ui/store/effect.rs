//! Side effects returned by the reducer for execution by the store.

use crate::registration::Registration;

/// Side effects that the reducer requests to be performed after state updates.
///
/// This keeps the reducer pure by separating state computation from storage
/// and file I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No side effect needed.
    None,
    /// Append a registration to storage.
    SaveRegistration(Registration),
    /// Remove one registration from storage.
    DeleteRegistration(String),
    /// Remove every stored registration.
    ClearRegistrations,
    /// Re-read the stored collection.
    LoadRegistrations,
    /// Write the given registrations to a CSV file.
    ExportCsv(Vec<Registration>),
}
