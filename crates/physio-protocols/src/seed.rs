//! Demo roster used whenever no stored roster can be loaded.

use jiff::civil::{Date, date};
use physio_core::models::log::{PainScore, SessionLog};
use physio_core::models::patient::{Patient, PatientStatus};
use physio_core::models::report::WeeklyReport;
use physio_core::roster::Roster;

use crate::protocols::{acl_rehab, wrist_post_cast};

fn log(id: &str, day: Date, pain: u8, rom: u32, reps: u32, notes: &str) -> SessionLog {
    SessionLog {
        id: id.to_string(),
        date: day,
        // Seed values are all within range.
        pain_score: PainScore::new(pain).unwrap_or_default(),
        max_rom: rom,
        reps_completed: reps,
        notes: Some(notes.to_string()),
        voice_note: None,
        voice_analysis: None,
    }
}

pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "p1".to_string(),
            name: "Ishaan".to_string(),
            age: 24,
            email: "ishaan.demo@example.com".to_string(),
            physio_name: "Dr. Shrikant Tiwari".to_string(),
            injury: "Right Wrist Fracture (Cast Removal)".to_string(),
            injury_type: "wrist_post_cast".to_string(),
            start_date: date(2023, 11, 1),
            status: PatientStatus::OnTrack,
            prescribed_exercises: wrist_post_cast::EXERCISES.clone(),
            benchmark_rom: vec![30, 40, 50, 60, 70, 75, 80],
            logs: vec![
                log("l1", date(2023, 11, 2), 7, 15, 5, "Very stiff after cast removal"),
                log("l2", date(2023, 11, 5), 6, 20, 8, "Less swelling"),
                log("l3", date(2023, 11, 9), 5, 28, 10, "Feeling better movement"),
                log("l4", date(2023, 11, 12), 4, 35, 12, "Good session"),
                log("l5", date(2023, 11, 15), 3, 42, 15, "Almost hit target"),
            ],
            weekly_reports: vec![WeeklyReport {
                id: "r1".to_string(),
                date: date(2023, 11, 8),
                title: "Week 1 Review".to_string(),
                content: "Ishaan, excellent start. I noticed in your video logs that you are guarding your wrist slightly. Try to relax the shoulder.".to_string(),
                physio_name: "Dr. Shrikant Tiwari".to_string(),
            }],
        },
        Patient {
            id: "p2".to_string(),
            name: "Rahul Verma".to_string(),
            age: 32,
            email: "rahul.v@example.com".to_string(),
            physio_name: "Dr. Shrikant Tiwari".to_string(),
            injury: "ACL Reconstruction".to_string(),
            injury_type: "acl_rehab".to_string(),
            start_date: date(2023, 10, 15),
            status: PatientStatus::Behind,
            prescribed_exercises: acl_rehab::EXERCISES.clone(),
            benchmark_rom: vec![60, 75, 90, 100],
            logs: vec![
                log("l6", date(2023, 10, 16), 8, 45, 8, "High pain"),
                log("l7", date(2023, 10, 25), 6, 60, 10, "Struggling with extension"),
            ],
            weekly_reports: Vec::new(),
        },
    ]
}

pub fn seed_roster() -> Roster {
    // Seed ids are distinct literals.
    Roster::new(seed_patients()).unwrap_or_default()
}

/// The record self-registered patients start from: the first seed patient,
/// whose identity fields the caller overwrites.
pub fn registration_template() -> Patient {
    let mut template = seed_patients().swap_remove(0);
    template.logs.clear();
    template.weekly_reports.clear();
    template
}
