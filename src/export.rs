//! CSV export of the registration list.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::{error::ExportError, registration::Registration};

/// Column headers, in output order.
pub const HEADERS: [&str; 7] = [
    "ID",
    "Nombre y Apellidos",
    "DNI/Código",
    "Carrera/Empresa",
    "Tipo de Participante",
    "Correo",
    "Fecha de Registro",
];

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Name of the export file for the given day.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("registros-norbert-{}.csv", date.format("%Y-%m-%d"))
}

/// Renders the header line plus one line per registration. Name, affiliation
/// and participant type are always quoted; the remaining columns are quoted
/// only when their content requires it. Lines are separated by `\n` with no
/// trailing newline.
pub fn to_csv(registrations: &[Registration]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(vec![]);

    writer.write_record(HEADERS)?;

    for r in registrations {
        writer.write_record([
            plain(&r.id),
            quoted(&r.name),
            plain(&r.id_code),
            quoted(&r.affiliation),
            quoted(&r.participant_type),
            plain(&r.email),
            plain(&r.registered_at),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;

    let mut content = String::from_utf8_lossy(&bytes).into_owned();

    if content.ends_with('\n') {
        content.pop();
    }

    Ok(content)
}

/// Writes the CSV export for `date` into `dir`, creating the directory when
/// needed. Returns the path of the written file.
pub fn write_csv(
    dir: &Path,
    registrations: &[Registration],
    date: NaiveDate,
) -> Result<PathBuf> {
    if registrations.is_empty() {
        return Err(ExportError::Empty);
    }

    let content = to_csv(registrations)?;

    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(date));

    fs::write(&path, content).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!(
        "exported {} registration(s) to {}",
        registrations.len(),
        path.display()
    );

    Ok(path)
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn plain(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "./export_tests.rs"]
mod tests;
