use std::time::Duration;

use eyre::{Result, WrapErr, bail, eyre};
use physio_core::audio::{self, DEFAULT_AUDIO_MIME};
use physio_core::models::log::PainScore;
use physio_gateway::model::GenerativeModel;
use physio_sensor::feed::{Feedback, SensorFeed, SessionSummary};
use physio_sensor::session::run_session;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};

use crate::app::{App, DEFAULT_LOG_NOTE, LogSubmission, VoiceNote, today};
use crate::cli::{PatientCommands, SessionArgs};

pub async fn handle<M: GenerativeModel>(app: &mut App<M>, action: PatientCommands) -> Result<()> {
    match action {
        PatientCommands::Exercises => exercises(app),
        PatientCommands::Motivate => {
            println!("{}", app.motivation().await?);
            Ok(())
        }
        PatientCommands::Session(args) => session(app, args).await,
        PatientCommands::Reports => reports(app),
        PatientCommands::Discharge { yes } => discharge(app, yes).await,
    }
}

fn exercises<M: GenerativeModel>(app: &App<M>) -> Result<()> {
    let patient = app.current_patient()?;
    println!("{} ({})", patient.injury, patient.status.label());
    for exercise in &patient.prescribed_exercises {
        println!(
            "[{}] {}: {} reps, target {}°",
            exercise.id, exercise.name, exercise.target_reps, exercise.target_rom
        );
        println!("    {}", exercise.instructions);
    }
    Ok(())
}

fn reports<M: GenerativeModel>(app: &App<M>) -> Result<()> {
    let patient = app.current_patient()?;
    let mut any = false;
    for report in patient.reports_newest_first() {
        any = true;
        println!("{}  {}", report.date, report.title);
        println!("{}", report.content);
        println!("    - {}", report.physio_name);
        println!();
    }
    if !any {
        println!("No reports from your clinician yet.");
    }
    Ok(())
}

async fn session<M: GenerativeModel>(app: &mut App<M>, args: SessionArgs) -> Result<()> {
    let patient = app.current_patient()?;
    let exercise = match &args.exercise {
        Some(id) => patient
            .exercise(id)
            .ok_or_else(|| eyre!("no prescribed exercise with id {id}"))?,
        None => patient
            .prescribed_exercises
            .first()
            .ok_or_else(|| eyre!("no exercises prescribed"))?,
    }
    .clone();
    let pain_score = PainScore::new(args.pain)?;

    // Read the recording up front so a bad path fails before the session.
    let voice_note = match (&args.voice_note, args.demo_voice) {
        (Some(path), _) => {
            let bytes = tokio::fs::read(path)
                .await
                .wrap_err_with(|| format!("failed to read voice note {}", path.display()))?;
            let mime = path
                .extension()
                .and_then(|e| e.to_str())
                .map(audio::mime_for_extension)
                .unwrap_or(DEFAULT_AUDIO_MIME);
            Some(VoiceNote::Recording {
                mime: mime.to_string(),
                bytes,
            })
        }
        (None, true) => Some(VoiceNote::Demo),
        (None, false) => None,
    };

    println!(
        "{}: {} reps, target {}°. Press Ctrl-C to stop early.",
        exercise.name, exercise.target_reps, exercise.target_rom
    );
    let summary = track(
        exercise.target_reps,
        Duration::from_millis(args.tick_ms.max(1)),
    )
    .await?;
    println!(
        "Session {}: {} reps, peak ROM {}°.",
        if summary.completed { "complete" } else { "stopped" },
        summary.reps,
        summary.peak_rom
    );

    let submission = LogSubmission {
        pain_score,
        note: args.note.or_else(|| Some(DEFAULT_LOG_NOTE.to_string())),
        voice_note,
    };
    let log = app.submit_log(&summary, submission, today()).await?;
    if let Some(analysis) = &log.voice_analysis {
        println!("Voice note: {analysis}");
    }
    println!("Session logged ({}).", log.id);
    Ok(())
}

/// Run the simulated feed, echoing rep and cue changes, until the target is
/// reached or Ctrl-C is pressed.
async fn track(target_reps: u32, period: Duration) -> Result<SessionSummary> {
    let feed = SensorFeed::new(StdRng::from_entropy(), Some(target_reps));
    let target = feed.target_reps();
    let (frame_tx, mut frame_rx) = mpsc::channel(32);
    let (stop_tx, stop_rx) = oneshot::channel();
    let runner = tokio::spawn(run_session(feed, period, frame_tx, stop_rx));

    println!("{}", Feedback::Align.message());
    let mut stop_tx = Some(stop_tx);
    let mut last = (0, Feedback::Align);
    loop {
        tokio::select! {
            frame = frame_rx.recv() => {
                let Some(frame) = frame else { break };
                if (frame.reps, frame.feedback) != last {
                    println!(
                        "reps {}/{target}  angle {:>2}°  peak {:>2}°  {}",
                        frame.reps,
                        frame.angle,
                        frame.peak_angle,
                        frame.feedback.message()
                    );
                    last = (frame.reps, frame.feedback);
                }
            }
            _ = tokio::signal::ctrl_c(), if stop_tx.is_some() => {
                if let Some(tx) = stop_tx.take() {
                    let _ = tx.send(());
                }
            }
        }
    }

    Ok(runner.await?)
}

async fn discharge<M: GenerativeModel>(app: &mut App<M>, yes: bool) -> Result<()> {
    if !yes {
        bail!("discharge wipes all logs and reports; pass --yes to confirm");
    }
    let discharge = app.discharge().await?;
    println!("SYSTEM: Emailing discharge report to {}...", discharge.email);
    println!();
    println!("Subject: Recovery Journey Complete");
    println!();
    println!("{}...", discharge.preview());
    println!();
    println!("(Run with -v for the full report.)");
    Ok(())
}
