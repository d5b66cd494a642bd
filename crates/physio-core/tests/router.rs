use physio_core::error::CoreError;
use physio_core::models::clinician::Clinician;
use physio_core::router::Screen;

fn clinician() -> Clinician {
    Clinician {
        name: "Dr. Shrikant Tiwari".to_string(),
        id: "PHY-1001".to_string(),
    }
}

#[test]
fn default_screen_is_landing() {
    assert_eq!(Screen::default(), Screen::Landing);
    assert_eq!(Screen::default().name(), "landing");
}

#[test]
fn registration_path_reaches_patient_view() {
    let screen = Screen::Landing
        .begin_registration()
        .unwrap()
        .enter_patient_view("p1")
        .unwrap();
    assert_eq!(screen.name(), "patient");
    assert_eq!(screen.patient_id(), Some("p1"));
}

#[test]
fn login_path_reaches_clinician_view() {
    let screen = Screen::Landing
        .begin_clinician_login()
        .unwrap()
        .enter_clinician_view(clinician(), Some("p1".to_string()))
        .unwrap();
    assert_eq!(screen.name(), "clinician");
    assert_eq!(screen.selected_patient_id(), Some("p1"));

    let screen = screen.select_patient("p2").unwrap();
    assert_eq!(screen.selected_patient_id(), Some("p2"));
    assert_eq!(screen.clinician(), Some(&clinician()));
}

#[test]
fn out_of_order_transitions_are_rejected() {
    let err = Screen::Landing.enter_patient_view("p1").unwrap_err();
    assert!(matches!(err, CoreError::InvalidTransition { from: "landing", .. }));

    let patient = Screen::PatientView {
        patient_id: "p1".to_string(),
    };
    assert!(patient.clone().select_patient("p2").is_err());
    assert!(patient.begin_clinician_login().is_err());
}

#[test]
fn reset_returns_to_landing_from_anywhere() {
    let screens = [
        Screen::Registering,
        Screen::ClinicianLogin,
        Screen::PatientView {
            patient_id: "p1".to_string(),
        },
        Screen::ClinicianView {
            clinician: clinician(),
            selected_patient_id: None,
        },
    ];
    for screen in screens {
        assert_eq!(screen.reset(), Screen::Landing);
    }
}

#[test]
fn screen_round_trips_through_json() {
    let screen = Screen::ClinicianView {
        clinician: clinician(),
        selected_patient_id: Some("p2".to_string()),
    };
    let json = serde_json::to_string(&screen).unwrap();
    assert!(json.contains("\"screen\":\"clinician_view\""));
    assert_eq!(serde_json::from_str::<Screen>(&json).unwrap(), screen);
}
