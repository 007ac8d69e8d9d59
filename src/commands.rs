//! Non-interactive subcommands.

use std::{path::Path, str::FromStr};

use chrono::NaiveDate;
use color_eyre::eyre::{Result, eyre};
use prettytable::{Table, row};

use crate::{
    config::ConfigManager,
    error::ExportError,
    export,
    registration::Registration,
    repository::RegistrationRepository,
    ui::{colors::Theme, store::reducer::reducers::admin::NO_RECORDS_TO_EXPORT},
};

/// Settings that can be changed with the `config` subcommand.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub theme: Option<String>,
    pub event_name: Option<String>,
    pub modal_timeout: Option<String>,
}

/// Prints the stored registrations as a table, or as JSON.
pub fn list(repository: &RegistrationRepository, json: bool) -> Result<()> {
    let registrations = repository.load();
    log::info!("found {} registrations", registrations.len());

    if json {
        let j: String = serde_json::to_string(&registrations)?;
        println!("{}", j);
    } else {
        registrations_table(&registrations).printstd();
    }

    Ok(())
}

pub fn registrations_table(registrations: &[Registration]) -> Table {
    let mut table = Table::new();

    table.add_row(row![
        "ID",
        "NOMBRE",
        "DNI/CÓDIGO",
        "CARRERA/EMPRESA",
        "TIPO",
        "CORREO",
        "FECHA"
    ]);

    for r in registrations {
        table.add_row(row![
            r.id,
            r.name,
            r.id_code,
            r.affiliation,
            r.participant_type,
            r.email,
            r.display_date()
        ]);
    }

    table
}

/// Writes the CSV export into `dir` and prints where it went.
pub fn export(
    repository: &RegistrationRepository,
    dir: &Path,
    date: NaiveDate,
) -> Result<()> {
    let registrations = repository.load();

    match export::write_csv(dir, &registrations, date) {
        Ok(path) => {
            println!("{}", path.display());
            Ok(())
        }
        Err(ExportError::Empty) => {
            log::warn!("{NO_RECORDS_TO_EXPORT}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Validates and persists the requested settings.
pub fn update_config(
    manager: &mut ConfigManager,
    update: ConfigUpdate,
) -> Result<()> {
    let mut config = manager.get();

    if let Some(theme) = update.theme {
        let theme = Theme::from_str(&theme)
            .map_err(|_| eyre!("unknown theme: {theme}"))?;
        config.theme = theme.to_string();
    }

    if let Some(timeout) = update.modal_timeout {
        humantime::parse_duration(&timeout)
            .map_err(|e| eyre!("invalid modal timeout {timeout:?}: {e}"))?;
        config.modal_timeout = timeout;
    }

    if let Some(event_name) = update.event_name {
        config.event_name = event_name;
    }

    manager.update(config)?;
    println!("{}", serde_yaml::to_string(&manager.get())?);
    Ok(())
}

#[cfg(test)]
#[path = "./commands_tests.rs"]
mod tests;
