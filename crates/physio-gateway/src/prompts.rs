//! Prompt templates. Each builder interpolates patient fields into fixed
//! instruction text; nothing here talks to a model.

use std::fmt::Write;

use physio_core::models::injury::InjuryProfile;
use physio_core::models::patient::Patient;
use physio_core::progress::weeks_since_start;

/// Logs included in a progress summary.
pub const SUMMARY_LOG_WINDOW: usize = 5;

pub const VOICE_NOTE_INSTRUCTIONS: &str = "\
You are listening to a voice note from a physiotherapy patient after their exercise session.
1. Transcribe the audio exactly.
2. Extract any keywords related to pain (e.g., \"sharp\", \"dull\", \"hurts\"), fatigue, or difficulty.
3. Determine the sentiment (Positive/Negative/Neutral).

Format as: \"Transcription: [text] | Keywords: [list]\"";

/// Latest ROM, pain and reps, or zeros when nothing is logged yet.
fn latest(patient: &Patient) -> (u32, u8, u32) {
    patient
        .latest_log()
        .map(|l| (l.max_rom, l.pain_score.value(), l.reps_completed))
        .unwrap_or((0, 0, 0))
}

pub fn progress_summary(patient: &Patient) -> String {
    let mut logs = String::new();
    for l in patient.recent_logs(SUMMARY_LOG_WINDOW) {
        let _ = writeln!(
            logs,
            "- Date: {}, Pain (1-10): {}, ROM: {}°, Reps: {}, Notes: {}",
            l.date,
            l.pain_score,
            l.max_rom,
            l.reps_completed,
            l.notes.as_deref().unwrap_or("none"),
        );
    }

    format!(
        "You are an expert physiotherapist assistant. Analyze the following patient data.

Patient: {name}
Injury: {injury}

Recent Progress Logs (Last {window} entries):
{logs}
Please provide:
1. A summary of their progress trend.
2. Specific observations about their pain vs. ROM.
3. Recommendations for the physiotherapist.

Format the output as a concise Markdown block.",
        name = patient.name,
        injury = patient.injury,
        window = SUMMARY_LOG_WINDOW,
    )
}

pub fn recovery_prediction(patient: &Patient, profile: &InjuryProfile) -> String {
    let (rom, pain, _) = latest(patient);
    format!(
        "You are an advanced clinical prediction bot.

Context:
Patient Name: {name}
Actual Injury: {injury}
Physio's Selected Protocol: {protocol}
Protocol Description: {description}
Standard Milestones: {milestones}

Patient's Current Status:
- Latest ROM: {rom} degrees
- Latest Pain: {pain}/10
- Weeks since start: Approx {weeks:.1} weeks

Task:
Compare the patient's actual progress against the standard protocol milestones.
Predict the trajectory for the next 2 weeks.
Are they recovering faster or slower than the traditional curve for this specific injury?

Keep it conversational but clinical.",
        name = patient.name,
        injury = patient.injury,
        protocol = profile.name,
        description = profile.description,
        milestones = profile.milestone_summary(),
        weeks = weeks_since_start(patient),
    )
}

pub fn motivation(patient: &Patient) -> String {
    let (_, pain, reps) = latest(patient);
    format!(
        "Write a 3-sentence motivational \"Progress Booster\" for a patient named {name} recovering from {injury}.
Their latest pain score was {pain}/10 (lower is better) and they completed {reps} reps.
Be encouraging, professional, and concise. Do not use markdown.",
        name = patient.name,
        injury = patient.injury,
    )
}

pub fn discharge_report(patient: &Patient) -> String {
    let (rom, pain, _) = latest(patient);
    format!(
        "Draft a compassionate and professional discharge summary email for {name}.
Email Subject: Recovery Journey Completion - {injury}

Details:
- Patient: {name}
- Injury: {injury}
- Sessions Logged: {sessions}
- Final ROM: {rom}°
- Final Pain: {pain}/10

The email should congratulate them on completing their prescribed protocol and instruct them that their temporary data logs are now being securely wiped from the active device storage.
Do not use markdown formatting.",
        name = patient.name,
        injury = patient.injury,
        sessions = patient.logs.len(),
    )
}
