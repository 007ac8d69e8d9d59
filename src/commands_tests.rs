use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use crate::{
    registration::RegistrationForm,
    storage::memory::MemoryStorage,
};

use super::*;

fn registration(id: &str, name: &str) -> Registration {
    Registration::from_form(
        RegistrationForm {
            name: name.to_string(),
            id_code: "74859612".to_string(),
            affiliation: "Ingeniería".to_string(),
            participant_type: "Estudiante".to_string(),
            email: format!("{id}@example.com"),
        },
        id.to_string(),
        Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap(),
    )
}

fn repository(registrations: &[Registration]) -> RegistrationRepository {
    let repository =
        RegistrationRepository::new(Box::new(MemoryStorage::new()));
    for r in registrations {
        repository.append(r.clone()).unwrap();
    }
    repository
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn test_registrations_table() {
    let table = registrations_table(&[
        registration("a", "Ana Pérez"),
        registration("b", "Luis Gómez"),
    ]);

    let rendered = table.to_string();
    assert_eq!(table.len(), 3);
    assert!(rendered.contains("CARRERA/EMPRESA"));
    assert!(rendered.contains("Ana Pérez"));
    assert!(rendered.contains("b@example.com"));
}

#[test]
fn test_export_writes_csv() {
    let dir = tempdir().unwrap();
    let repository = repository(&[registration("a", "Ana Pérez")]);

    export(&repository, dir.path(), date()).unwrap();

    let contents = fs::read_to_string(
        dir.path().join("registros-norbert-2026-10-18.csv"),
    )
    .unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("\"Ana Pérez\""));
}

#[test]
fn test_export_empty_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    export(&repository(&[]), &out, date()).unwrap();

    assert!(!out.join("registros-norbert-2026-10-18.csv").exists());
}

#[test]
fn test_update_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yml");
    let mut manager = ConfigManager::builder()
        .path(path.to_string_lossy().to_string())
        .build()
        .unwrap();

    update_config(
        &mut manager,
        ConfigUpdate {
            theme: Some("Blue".to_string()),
            event_name: Some("Congreso".to_string()),
            modal_timeout: Some("5s".to_string()),
        },
    )
    .unwrap();

    let reloaded = ConfigManager::builder()
        .path(path.to_string_lossy().to_string())
        .build()
        .unwrap()
        .get();
    assert_eq!(reloaded.theme, "Blue");
    assert_eq!(reloaded.event_name, "Congreso");
    assert_eq!(reloaded.modal_timeout, "5s");
}

#[test]
fn test_update_config_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yml");
    let mut manager = ConfigManager::builder()
        .path(path.to_string_lossy().to_string())
        .build()
        .unwrap();

    assert!(
        update_config(
            &mut manager,
            ConfigUpdate {
                theme: Some("Purple".to_string()),
                ..ConfigUpdate::default()
            },
        )
        .is_err()
    );

    assert!(
        update_config(
            &mut manager,
            ConfigUpdate {
                modal_timeout: Some("soon".to_string()),
                ..ConfigUpdate::default()
            },
        )
        .is_err()
    );

    assert_eq!(manager.get().theme, "Teal");
}
