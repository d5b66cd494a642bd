//! End-to-end flows over in-memory storage and a canned model.

use jiff::civil::date;
use physio_cli::app::{
    App, DEFAULT_LOG_NOTE, DEMO_VOICE_ANALYSIS, DEMO_VOICE_NOTE, LogSubmission,
    UNKNOWN_PROTOCOL_MESSAGE, VoiceNote,
};
use physio_core::models::log::{LogEdit, PainScore};
use physio_core::models::patient::PatientStatus;
use physio_core::router::Screen;
use physio_core::storage_keys;
use physio_gateway::error::GatewayError;
use physio_gateway::gateway::AiGateway;
use physio_gateway::model::{GenerateRequest, GenerativeModel};
use physio_protocols::get_protocol;
use physio_protocols::onboarding::NewCaseDetails;
use physio_protocols::registration::{RegistrationDetails, RegistrationOutcome};
use physio_sensor::feed::SessionSummary;
use physio_storage::backend::StorageBackend;
use physio_storage::store::SessionStore;

struct EchoModel;

impl GenerativeModel for EchoModel {
    fn model_id(&self) -> &str {
        "echo"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        match &request.inline_data {
            Some(audio) => Ok(format!("transcribed {} bytes", audio.data.len())),
            None => Ok(format!("AI: {}", request.prompt.len())),
        }
    }
}

async fn app_on(backend: StorageBackend) -> App<EchoModel> {
    App::load(SessionStore::new(backend), AiGateway::new(EchoModel)).await
}

fn details(email: &str) -> RegistrationDetails {
    RegistrationDetails {
        name: "Meera Iyer".to_string(),
        age: "abc".to_string(),
        email: email.to_string(),
        physio_name: "Dr. Shrikant Tiwari".to_string(),
    }
}

fn summary(peak_rom: u32, reps: u32) -> SessionSummary {
    SessionSummary {
        peak_rom,
        reps,
        ticks: 120,
        completed: true,
    }
}

#[tokio::test]
async fn fresh_storage_starts_from_seed_on_landing() {
    let app = app_on(StorageBackend::session()).await;
    assert_eq!(app.roster().len(), 2);
    assert_eq!(app.screen(), &Screen::Landing);
    assert!(app.current_patient().is_err());
    assert!(app.current_clinician().is_err());
}

#[tokio::test]
async fn registration_with_known_email_signs_in_existing_patient() {
    let mut app = app_on(StorageBackend::session()).await;

    let outcome = app.register(details("ISHAAN.DEMO@example.com")).await.unwrap();

    assert_eq!(
        outcome,
        RegistrationOutcome::Existing {
            patient_id: "p1".to_string()
        }
    );
    assert_eq!(app.roster().len(), 2);
    assert_eq!(app.current_patient().unwrap().id, "p1");
}

#[tokio::test]
async fn registration_with_new_email_prepends_patient() {
    let mut app = app_on(StorageBackend::session()).await;

    let outcome = app.register(details("meera@example.com")).await.unwrap();

    assert!(matches!(outcome, RegistrationOutcome::Created { .. }));
    assert_eq!(app.roster().len(), 3);
    let first = app.roster().first().unwrap();
    assert_eq!(first.id, outcome.patient_id());
    assert_eq!(first.age, 25);
    assert!(first.logs.is_empty());
    assert!(first.weekly_reports.is_empty());
}

#[tokio::test]
async fn registering_twice_without_logout_is_rejected() {
    let mut app = app_on(StorageBackend::session()).await;
    app.register(details("meera@example.com")).await.unwrap();
    assert!(app.register(details("meera@example.com")).await.is_err());
}

#[tokio::test]
async fn state_survives_reload_on_local_storage() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = app_on(StorageBackend::local(dir.path())).await;
    let outcome = app.register(details("meera@example.com")).await.unwrap();

    let reloaded = app_on(StorageBackend::local(dir.path())).await;
    assert_eq!(reloaded.roster().len(), 3);
    assert_eq!(
        reloaded.screen(),
        &Screen::PatientView {
            patient_id: outcome.patient_id().to_string()
        }
    );
}

#[tokio::test]
async fn failed_screen_save_keeps_memory_in_step_with_disk() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the screen file belongs makes its rename fail.
    std::fs::create_dir(dir.path().join(format!("{}.json", storage_keys::SESSION))).unwrap();

    let mut app = app_on(StorageBackend::local(dir.path())).await;
    assert!(app.register(details("meera@example.com")).await.is_err());

    assert_eq!(app.roster().len(), 3);
    assert!(app.roster().find_by_email("meera@example.com").is_some());
    assert_eq!(app.screen(), &Screen::Landing);
    let reloaded = app_on(StorageBackend::local(dir.path())).await;
    assert_eq!(reloaded.roster().len(), app.roster().len());
}

#[tokio::test]
async fn submitted_log_is_appended() {
    let mut app = app_on(StorageBackend::session()).await;
    app.register(details("ishaan.demo@example.com")).await.unwrap();
    let before = app.current_patient().unwrap().logs.clone();

    let submission = LogSubmission {
        pain_score: PainScore::default(),
        note: Some(DEFAULT_LOG_NOTE.to_string()),
        voice_note: None,
    };
    let log = app
        .submit_log(&summary(62, 10), submission, date(2024, 1, 5))
        .await
        .unwrap();

    let logs = &app.current_patient().unwrap().logs;
    assert_eq!(logs.len(), before.len() + 1);
    assert_eq!(&logs[..before.len()], before.as_slice());
    let last = logs.last().unwrap();
    assert_eq!(last, &log);
    assert_eq!(last.max_rom, 62);
    assert_eq!(last.reps_completed, 10);
    assert_eq!(last.pain_score.value(), 5);
    assert!(last.voice_note.is_none());
}

#[tokio::test]
async fn recorded_voice_note_is_embedded_and_transcribed() {
    let mut app = app_on(StorageBackend::session()).await;
    app.register(details("meera@example.com")).await.unwrap();

    let submission = LogSubmission {
        pain_score: PainScore::new(3).unwrap(),
        note: None,
        voice_note: Some(VoiceNote::Recording {
            mime: "audio/wav".to_string(),
            bytes: b"RIFF".to_vec(),
        }),
    };
    let log = app
        .submit_log(&summary(40, 2), submission, date(2024, 1, 5))
        .await
        .unwrap();

    assert_eq!(log.voice_note.as_deref(), Some("data:audio/wav;base64,UklGRg=="));
    assert_eq!(log.voice_analysis.as_deref(), Some("transcribed 8 bytes"));
    assert!(log.notes.is_none());
}

#[tokio::test]
async fn demo_voice_note_uses_canned_transcript() {
    let mut app = app_on(StorageBackend::session()).await;
    app.register(details("meera@example.com")).await.unwrap();

    let submission = LogSubmission {
        pain_score: PainScore::default(),
        note: None,
        voice_note: Some(VoiceNote::Demo),
    };
    let log = app
        .submit_log(&summary(40, 2), submission, date(2024, 1, 5))
        .await
        .unwrap();

    assert_eq!(log.voice_note.as_deref(), Some(DEMO_VOICE_NOTE));
    assert_eq!(log.voice_analysis.as_deref(), Some(DEMO_VOICE_ANALYSIS));
}

#[tokio::test]
async fn discharge_clears_case_and_signs_out() {
    let mut app = app_on(StorageBackend::session()).await;
    app.register(details("ishaan.demo@example.com")).await.unwrap();

    let discharge = app.discharge().await.unwrap();

    assert_eq!(discharge.email, "ishaan.demo@example.com");
    assert!(discharge.report.starts_with("AI: "));
    assert!(discharge.preview().chars().count() <= 150);
    assert_eq!(app.screen(), &Screen::Landing);

    let patient = app.roster().get("p1").unwrap();
    assert!(patient.logs.is_empty());
    assert!(patient.weekly_reports.is_empty());
    assert_eq!(patient.status, PatientStatus::OnTrack);
}

#[tokio::test]
async fn unknown_licence_keeps_landing_screen() {
    let mut app = app_on(StorageBackend::session()).await;
    let err = app.login("PT-00000").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "License ID not found in the national registry."
    );
    assert_eq!(app.screen(), &Screen::Landing);
}

#[tokio::test]
async fn clinician_login_selects_first_patient() {
    let mut app = app_on(StorageBackend::session()).await;
    let clinician = app.login(" PT-88321 ").await.unwrap();

    assert_eq!(clinician.name, "Dr. Shrikant Tiwari");
    assert_eq!(app.selected_patient().unwrap().id, "p1");
    assert_eq!(app.chart().unwrap().len(), 5);
}

#[tokio::test]
async fn editing_a_log_leaves_others_untouched() {
    let mut app = app_on(StorageBackend::session()).await;
    app.login("PT-88321").await.unwrap();
    let before = app.selected_patient().unwrap().logs.clone();
    let target = before[1].id.clone();

    let edit = LogEdit {
        max_rom: 77,
        pain_score: PainScore::new(1).unwrap(),
    };
    app.edit_log(&target, edit).await.unwrap();

    let after = &app.selected_patient().unwrap().logs;
    for (old, new) in before.iter().zip(after) {
        if old.id == target {
            assert_eq!(new.max_rom, 77);
            assert_eq!(new.pain_score.value(), 1);
            assert_eq!(new.notes, old.notes);
        } else {
            assert_eq!(old, new);
        }
    }
    assert!(app.edit_log("missing", edit).await.is_err());
}

#[tokio::test]
async fn report_defaults_title_and_author() {
    let mut app = app_on(StorageBackend::session()).await;
    app.login("PT-99402").await.unwrap();
    let logs = app.selected_patient().unwrap().logs.len();

    let report = app
        .add_report(None, "Good progress this week.", date(2024, 1, 7))
        .await
        .unwrap();

    assert_eq!(report.title, format!("Week {} Update", logs.div_ceil(3)));
    assert_eq!(report.physio_name, "Dr. Sarah Connor");
    let newest = app
        .selected_patient()
        .unwrap()
        .reports_newest_first()
        .next()
        .unwrap()
        .clone();
    assert_eq!(newest, report);

    assert!(app.add_report(None, "   ", date(2024, 1, 7)).await.is_err());
}

#[tokio::test]
async fn prediction_with_unknown_protocol_returns_error_text() {
    let mut app = app_on(StorageBackend::session()).await;
    app.login("PT-88321").await.unwrap();

    let text = app.predict(Some("hip_replacement")).await.unwrap();
    assert_eq!(text, UNKNOWN_PROTOCOL_MESSAGE);

    let text = app.predict(Some("acl_rehab")).await.unwrap();
    assert!(text.starts_with("AI: "));
    assert!(app.analyze().await.unwrap().starts_with("AI: "));
}

#[tokio::test]
async fn new_case_gets_protocol_bundle_and_is_selected() {
    let mut app = app_on(StorageBackend::session()).await;
    app.login("PT-88321").await.unwrap();

    let case = NewCaseDetails {
        name: "Asha Rao".to_string(),
        age: "".to_string(),
        injury_type: "frozen_shoulder".to_string(),
    };
    let patient = app
        .create_case("98765 43210", "1234", case, date(2024, 2, 1))
        .await
        .unwrap();

    let protocol = get_protocol("frozen_shoulder").unwrap();
    assert_eq!(patient.prescribed_exercises, protocol.exercises());
    assert_eq!(patient.benchmark_rom, protocol.benchmarks());
    assert_eq!(patient.email, "asha.rao@example.com");
    assert_eq!(patient.age, 30);
    assert_eq!(patient.physio_name, "Dr. Shrikant Tiwari");
    assert_eq!(app.roster().first().unwrap().id, patient.id);
    assert_eq!(app.selected_patient().unwrap().id, patient.id);
}

#[tokio::test]
async fn new_case_with_wrong_otp_changes_nothing() {
    let mut app = app_on(StorageBackend::session()).await;
    app.login("PT-88321").await.unwrap();

    let case = NewCaseDetails {
        name: "Asha Rao".to_string(),
        age: "41".to_string(),
        injury_type: "acl_rehab".to_string(),
    };
    let err = app
        .create_case("9876543210", "0000", case, date(2024, 2, 1))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid OTP. (Hint: Use 1234)");
    assert_eq!(app.roster().len(), 2);
}

#[tokio::test]
async fn stale_screen_is_reset_on_load() {
    let backend = StorageBackend::session();
    let store = SessionStore::new(backend.clone());
    store
        .save_screen(&Screen::PatientView {
            patient_id: "gone".to_string(),
        })
        .await
        .unwrap();

    let app = app_on(backend).await;
    assert_eq!(app.screen(), &Screen::Landing);
}

#[tokio::test]
async fn reset_storage_restores_seed() {
    let mut app = app_on(StorageBackend::session()).await;
    app.register(details("meera@example.com")).await.unwrap();

    app.reset_storage().await.unwrap();

    assert_eq!(app.roster().len(), 2);
    assert_eq!(app.screen(), &Screen::Landing);
}
