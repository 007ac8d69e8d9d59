use std::fs;

use chrono::Utc;
use tempfile::{TempDir, tempdir};

use crate::{
    registration::{Registration, RegistrationForm},
    repository::REGISTRATIONS_KEY,
    storage::{MockStorageService, StorageService, memory::MemoryStorage},
    ui::store::{
        reducer::{StoreReducer, reducers::admin::ALL_RECORDS_DELETED},
        state::{Confirm, ViewID},
    },
};

use super::*;

fn registration(id: &str) -> Registration {
    Registration::from_form(
        RegistrationForm {
            name: format!("Nombre {id}"),
            id_code: "1234".to_string(),
            affiliation: "Ingeniería".to_string(),
            participant_type: "Estudiante".to_string(),
            email: format!("{id}@example.com"),
        },
        id.to_string(),
        Utc::now(),
    )
}

fn setup() -> (Store, Rc<MemoryStorage>, TempDir) {
    let storage = Rc::new(MemoryStorage::new());
    let export_dir = tempdir().unwrap();
    let store = Store::new(
        State::default(),
        StoreReducer::boxed(),
        RegistrationRepository::new(Box::new(Rc::clone(&storage))),
        export_dir.path().to_path_buf(),
    );
    (store, storage, export_dir)
}

fn stored_ids(storage: &MemoryStorage) -> Vec<String> {
    storage
        .get(REGISTRATIONS_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str::<Vec<Registration>>(&raw).unwrap())
        .unwrap_or_default()
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn test_submit_persists_and_opens_modal() {
    let (store, storage, _dir) = setup();
    for c in "Ana".chars() {
        store.dispatch(Action::InputChar(c));
    }

    store.dispatch(Action::SubmitRegistration(registration("a")));

    let state = store.get_state();
    assert_eq!(stored_ids(&storage), ["a"]);
    assert_eq!(state.registrations.len(), 1);
    assert!(state.success_modal.is_some());
    assert_eq!(state.form, RegistrationForm::default());
}

#[test]
fn test_submit_failure_keeps_form_and_sets_error() {
    let mut storage = MockStorageService::new();
    storage.expect_get().returning(|_| Ok(None));
    storage.expect_set().returning(|_, _| {
        Err(StorageError::Write {
            path: "storage.json".into(),
            source: std::io::Error::other("disk full"),
        })
    });
    let dir = tempdir().unwrap();
    let store = Store::new(
        State::default(),
        StoreReducer::boxed(),
        RegistrationRepository::new(Box::new(storage)),
        dir.path().to_path_buf(),
    );

    store.dispatch(Action::InputChar('A'));
    store.dispatch(Action::SubmitRegistration(registration("a")));

    let state = store.get_state();
    assert!(state.error.as_deref().unwrap().contains("disk full"));
    assert!(state.success_modal.is_none());
    assert_eq!(state.form.name, "A");
}

#[test]
fn test_open_admin_reflects_external_modification() {
    let (store, storage, _dir) = setup();
    store.dispatch(Action::SubmitRegistration(registration("a")));

    let external =
        serde_json::to_string(&vec![registration("x"), registration("y")])
            .unwrap();
    storage.set(REGISTRATIONS_KEY, &external).unwrap();

    store.dispatch(Action::OpenAdmin);

    let state = store.get_state();
    assert_eq!(state.view_id, ViewID::Admin);
    let ids = state.registrations.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["x", "y"]);
}

#[test]
fn test_delete_after_confirm() {
    let (store, storage, _dir) = setup();
    for id in ["a", "b", "c"] {
        store.dispatch(Action::SubmitRegistration(registration(id)));
    }
    store.dispatch(Action::OpenAdmin);

    store.dispatch(Action::RequestConfirm(Confirm::DeleteRegistration(
        "b".to_string(),
    )));
    assert_eq!(stored_ids(&storage), ["a", "b", "c"]);

    store.dispatch(Action::AcceptConfirm);

    assert_eq!(stored_ids(&storage), ["a", "c"]);
    let state = store.get_state();
    let ids = state.registrations.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn test_clear_all_after_confirm() {
    let (store, storage, _dir) = setup();
    store.dispatch(Action::SubmitRegistration(registration("a")));
    store.dispatch(Action::OpenAdmin);

    store.dispatch(Action::RequestConfirm(Confirm::ClearAll));
    store.dispatch(Action::AcceptConfirm);

    assert_eq!(storage.get(REGISTRATIONS_KEY).unwrap(), None);
    let state = store.get_state();
    assert!(state.registrations.is_empty());
    assert_eq!(state.alert.as_deref(), Some(ALL_RECORDS_DELETED));
}

#[test]
fn test_export_writes_file_and_alerts() {
    let (store, _storage, dir) = setup();
    store.dispatch(Action::SubmitRegistration(registration("a")));
    store.dispatch(Action::OpenAdmin);

    store.dispatch(Action::ExportCsv);

    let expected = dir
        .path()
        .join(export::export_file_name(Utc::now().date_naive()));
    assert!(expected.exists());
    let content = fs::read_to_string(&expected).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(
        store
            .get_state()
            .alert
            .as_deref()
            .unwrap()
            .starts_with("Registros exportados a ")
    );
}

#[test]
fn test_dispatch_runs_follow_up_actions() {
    let mut reducer = MockReducer::new();
    reducer
        .expect_reduce()
        .withf(|_, action| *action == Action::ReloadRegistrations)
        .times(1)
        .returning(|_, _| Effect::LoadRegistrations);
    reducer
        .expect_reduce()
        .withf(|_, action| matches!(action, Action::SetRegistrations(_)))
        .times(1)
        .returning(|_, _| Effect::None);

    let storage = MemoryStorage::with_values([(
        REGISTRATIONS_KEY,
        serde_json::to_string(&vec![registration("a")]).unwrap(),
    )]);
    let dir = tempdir().unwrap();
    let store = Store::new(
        State::default(),
        Box::new(reducer),
        RegistrationRepository::new(Box::new(storage)),
        dir.path().to_path_buf(),
    );

    store.dispatch(Action::ReloadRegistrations);
}
