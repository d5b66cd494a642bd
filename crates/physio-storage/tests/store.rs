use jiff::civil::date;
use physio_core::models::patient::{Patient, PatientStatus};
use physio_core::roster::Roster;
use physio_core::router::Screen;
use physio_core::storage_keys;
use physio_storage::backend::StorageBackend;
use physio_storage::error::StorageError;
use physio_storage::state;
use physio_storage::store::SessionStore;

fn patient(id: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: "Ishaan".to_string(),
        age: 24,
        email: format!("{id}@example.com"),
        physio_name: "Dr. Test".to_string(),
        injury: "Wrist".to_string(),
        injury_type: "wrist_post_cast".to_string(),
        start_date: date(2023, 11, 1),
        status: PatientStatus::OnTrack,
        prescribed_exercises: Vec::new(),
        logs: Vec::new(),
        benchmark_rom: vec![30],
        weekly_reports: Vec::new(),
    }
}

fn seed() -> Roster {
    Roster::new(vec![patient("seed")]).unwrap()
}

#[tokio::test]
async fn empty_local_storage_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(StorageBackend::local(dir.path()));

    let roster = store.load_roster(seed).await;
    assert_eq!(roster, seed());
}

#[tokio::test]
async fn saved_roster_is_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(StorageBackend::local(dir.path()));
    let roster = Roster::new(vec![patient("a"), patient("b")]).unwrap();

    store.save_roster(&roster).await.unwrap();
    assert!(dir.path().join(format!("{}.json", storage_keys::ROSTER)).exists());

    let reopened = SessionStore::new(StorageBackend::local(dir.path()));
    assert_eq!(reopened.load_roster(seed).await, roster);
}

#[tokio::test]
async fn malformed_roster_is_discarded_for_seed() {
    let dir = tempfile::tempdir().unwrap();
    let backend = StorageBackend::local(dir.path());
    backend
        .put(storage_keys::ROSTER, b"{not json".to_vec())
        .await
        .unwrap();

    let roster = SessionStore::new(backend).load_roster(seed).await;
    assert_eq!(roster, seed());
}

#[tokio::test]
async fn roster_with_duplicate_ids_is_discarded_for_seed() {
    let backend = StorageBackend::session();
    let dupes = serde_json::to_vec(&vec![patient("a"), patient("a")]).unwrap();
    backend.put(storage_keys::ROSTER, dupes).await.unwrap();

    let roster = SessionStore::new(backend).load_roster(seed).await;
    assert_eq!(roster, seed());
}

#[tokio::test]
async fn screen_defaults_to_landing_and_persists() {
    let store = SessionStore::new(StorageBackend::session());
    assert_eq!(store.load_screen().await, Screen::Landing);

    let screen = Screen::PatientView {
        patient_id: "a".to_string(),
    };
    store.save_screen(&screen).await.unwrap();
    assert_eq!(store.load_screen().await, screen);

    store.clear().await.unwrap();
    assert_eq!(store.load_screen().await, Screen::Landing);
}

#[tokio::test]
async fn session_backend_is_shared_between_clones() {
    let backend = StorageBackend::session();
    let clone = backend.clone();
    backend.put("k", b"v".to_vec()).await.unwrap();
    assert_eq!(clone.get("k").await.unwrap(), b"v");
}

#[tokio::test]
async fn missing_key_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let backend = StorageBackend::local(dir.path());
    let err = state::load_state::<Roster>(&backend, "absent").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { key } if key == "absent"));

    backend.delete("absent").await.unwrap();
}
