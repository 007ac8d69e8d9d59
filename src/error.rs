//! Error types for storage, validation, and CSV export.

use std::{io, path::PathBuf};

use itertools::Itertools;
use thiserror::Error;

use crate::registration::FormField;

/// Errors raised by a [`crate::storage::StorageService`] implementation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the backing file
    #[error("failed to read storage file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the backing file
    #[error("failed to write storage file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to serialize values for persistence
    #[error("failed to serialize storage data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Returned when a registration form has one or more empty fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .0.iter().join(", "))]
pub struct ValidationError(pub Vec<FormField>);

/// Errors raised while exporting registrations to CSV.
#[derive(Error, Debug)]
pub enum ExportError {
    /// There is nothing to export
    #[error("no registrations to export")]
    Empty,

    /// Failed to create the export directory or file
    #[error("failed to write export file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to encode a CSV record
    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),
}
