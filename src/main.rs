//! Terminal registration desk for collecting event attendee details
//!
//! Attendees fill in a five field form; every submission is stored in a local
//! JSON file. A hidden admin panel (F12) lists the stored registrations,
//! exports them to CSV and deletes them one at a time or all at once.
//!
//! # Examples
//!
//! ```bash
//! # launch the registration form
//! regdesk
//!
//! # print stored registrations
//! regdesk list
//!
//! # write registros-norbert-<date>.csv into ./exports
//! regdesk export --out exports
//! ```

use std::{
    fs::{self, File},
    path::PathBuf,
    rc::Rc,
};

use chrono::Utc;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use indoc::indoc;

use crate::{
    commands::ConfigUpdate,
    config::{Config, ConfigManager},
    repository::RegistrationRepository,
    storage::{file::FileStorage, memory::MemoryStorage},
    ui::{
        app::App,
        store::{Store, reducer::StoreReducer, state::State},
    },
};

#[doc(hidden)]
mod commands;
#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod export;
#[doc(hidden)]
mod registration;
#[doc(hidden)]
mod repository;
#[doc(hidden)]
mod storage;
#[doc(hidden)]
mod ui;

const APP_NAME: &str = "regdesk";
const DATA_FILE_NAME: &str = "storage.json";
const LOG_FILE_NAME: &str = "regdesk.log";

const AFTER_HELP: &str = indoc! {"
    Inside the form:
      tab / shift+tab   move between fields
      enter             submit the registration
      F12               open the admin panel
      ctrl+c            quit
"};

/// Event registration desk
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
struct Args {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// File registrations are stored in (overrides config)
    #[arg(long)]
    data_file: Option<String>,

    /// Directory CSV exports are written to (overrides config)
    #[arg(long)]
    export_dir: Option<String>,

    /// Keep registrations in memory only, nothing is written to disk
    #[arg(long, default_value_t = false)]
    in_memory: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print stored registrations
    List {
        /// Output json instead of table text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write stored registrations to registros-norbert-<date>.csv
    Export {
        /// Output directory (defaults to the configured export dir)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Change persisted settings and print the resulting config
    Config {
        /// One of Blue, Emerald, Indigo, Red, Teal
        #[arg(long)]
        theme: Option<String>,

        /// Title shown at the top of the form
        #[arg(long)]
        event_name: Option<String>,

        /// How long the confirmation stays visible, e.g. "3s"
        #[arg(long)]
        modal_timeout: Option<String>,
    },
}

#[doc(hidden)]
fn initialize_logger(args: &Args, project_dir: &ProjectDirs) -> Result<()> {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    if args.command.is_some() {
        simplelog::TermLogger::init(
            filter,
            simplelog::Config::default(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        )?;
        return Ok(());
    }

    // the UI owns the terminal so logs go to a file
    let log_dir = project_dir.data_local_dir();
    fs::create_dir_all(log_dir)?;
    let log_file = File::create(log_dir.join(LOG_FILE_NAME))?;
    simplelog::WriteLogger::init(filter, simplelog::Config::default(), log_file)?;

    Ok(())
}

#[doc(hidden)]
fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn get_project_config_path(project_dir: &ProjectDirs) -> Result<String> {
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn apply_overrides(args: &Args, mut config: Config) -> Config {
    if let Some(data_file) = args.data_file.as_ref() {
        config.data_file = Some(data_file.clone());
    }

    if let Some(export_dir) = args.export_dir.as_ref() {
        config.export_dir = Some(export_dir.clone());
    }

    config
}

#[doc(hidden)]
fn create_repository(
    args: &Args,
    data_file: PathBuf,
) -> Result<RegistrationRepository> {
    if args.in_memory {
        log::warn!("registrations will not be persisted");
        return Ok(RegistrationRepository::new(Box::new(MemoryStorage::new())));
    }

    let storage = FileStorage::open(data_file)?;
    log::info!("using data file {}", storage.path().display());
    Ok(RegistrationRepository::new(Box::new(storage)))
}

#[doc(hidden)]
fn launch_ui(
    config: Config,
    repository: RegistrationRepository,
    export_dir: PathBuf,
) -> Result<()> {
    let true_color_enabled =
        match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

    let store = Rc::new(Store::new(
        State::new(config, true_color_enabled),
        StoreReducer::boxed(),
        repository,
        export_dir,
    ));

    let app = App::new(store);
    app.launch()
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut args = Args::parse();
    let project_dir = get_project_dir()?;

    initialize_logger(&args, &project_dir)?;

    let config_path = match args.config.as_ref() {
        Some(path) => path.clone(),
        None => get_project_config_path(&project_dir)?,
    };

    let mut config_manager = ConfigManager::builder().path(config_path).build()?;

    let command = args.command.take();
    let config = apply_overrides(&args, config_manager.get());

    let data_file = config
        .data_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| project_dir.data_local_dir().join(DATA_FILE_NAME));
    let export_dir = config
        .export_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    match command {
        Some(Command::Config {
            theme,
            event_name,
            modal_timeout,
        }) => commands::update_config(
            &mut config_manager,
            ConfigUpdate {
                theme,
                event_name,
                modal_timeout,
            },
        ),
        Some(Command::List { json }) => {
            commands::list(&create_repository(&args, data_file)?, json)
        }
        Some(Command::Export { out }) => {
            let dir = out.map(PathBuf::from).unwrap_or(export_dir);
            commands::export(
                &create_repository(&args, data_file)?,
                &dir,
                Utc::now().date_naive(),
            )
        }
        None => launch_ui(config, create_repository(&args, data_file)?, export_dir),
    }
}
