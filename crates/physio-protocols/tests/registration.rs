use physio_core::router::Screen;
use physio_protocols::registration::{RegistrationDetails, RegistrationOutcome, register_patient};
use physio_protocols::seed::seed_roster;

fn details(email: &str) -> RegistrationDetails {
    RegistrationDetails {
        name: "Meera".to_string(),
        age: "29".to_string(),
        email: email.to_string(),
        physio_name: "Dr. Sarah Connor".to_string(),
    }
}

#[test]
fn existing_email_signs_in_without_creating() {
    let roster = seed_roster();
    let (roster, screen, outcome) =
        register_patient(roster, Screen::Registering, details("RAHUL.V@example.com")).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(
        outcome,
        RegistrationOutcome::Existing {
            patient_id: "p2".to_string()
        }
    );
    assert_eq!(screen.patient_id(), Some("p2"));
}

#[test]
fn new_email_creates_patient_at_front() {
    let (roster, screen, outcome) =
        register_patient(seed_roster(), Screen::Registering, details("meera@example.com")).unwrap();

    assert!(matches!(outcome, RegistrationOutcome::Created { .. }));
    assert_eq!(roster.len(), 3);
    let created = &roster.patients()[0];
    assert_eq!(created.id, outcome.patient_id());
    assert_eq!(created.name, "Meera");
    assert_eq!(created.age, 29);
    assert_eq!(created.physio_name, "Dr. Sarah Connor");
    assert!(created.logs.is_empty());
    assert!(created.weekly_reports.is_empty());
    assert_eq!(screen.patient_id(), Some(created.id.as_str()));
}

#[test]
fn unparsable_age_defaults_to_twenty_five() {
    let mut d = details("new@example.com");
    d.age = String::new();
    let (roster, _, _) = register_patient(seed_roster(), Screen::Registering, d).unwrap();
    assert_eq!(roster.patients()[0].age, 25);
}

#[test]
fn registration_requires_registering_screen() {
    assert!(register_patient(seed_roster(), Screen::Landing, details("x@example.com")).is_err());
}
