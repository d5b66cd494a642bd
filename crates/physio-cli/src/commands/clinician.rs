use eyre::Result;
use physio_core::models::log::{LogEdit, PainScore};
use physio_gateway::model::GenerativeModel;
use physio_protocols::onboarding::NewCaseDetails;

use crate::app::{App, today};
use crate::cli::{ClinicianCommands, EditLogArgs, NewCaseArgs, ReportArgs};

/// Logs shown by `clinician show`.
const RECENT_LOGS: usize = 5;

pub async fn handle<M: GenerativeModel>(
    app: &mut App<M>,
    action: ClinicianCommands,
) -> Result<()> {
    app.current_clinician()?;
    match action {
        ClinicianCommands::Patients => patients(app),
        ClinicianCommands::Select { patient_id } => {
            let patient = app.select_patient(&patient_id).await?;
            println!("Selected {} ({}).", patient.name, patient.id);
            Ok(())
        }
        ClinicianCommands::Show => show(app),
        ClinicianCommands::Chart => chart(app),
        ClinicianCommands::EditLog(args) => edit_log(app, args).await,
        ClinicianCommands::Report(args) => report(app, args).await,
        ClinicianCommands::Analyze => {
            println!("{}", app.analyze().await?);
            Ok(())
        }
        ClinicianCommands::Predict { protocol } => {
            println!("{}", app.predict(protocol.as_deref()).await?);
            Ok(())
        }
        ClinicianCommands::NewCase(args) => new_case(app, args).await,
    }
}

fn patients<M: GenerativeModel>(app: &App<M>) -> Result<()> {
    let selected = app.screen().selected_patient_id();
    for patient in app.roster().patients() {
        let marker = if Some(patient.id.as_str()) == selected { "*" } else { " " };
        println!(
            "{marker} {:<12} {:<20} {:<28} {:<9} {} logs",
            patient.id,
            patient.name,
            patient.injury,
            patient.status.label(),
            patient.logs.len()
        );
    }
    Ok(())
}

fn show<M: GenerativeModel>(app: &App<M>) -> Result<()> {
    let patient = app.selected_patient()?;
    println!("{} ({}), age {}", patient.name, patient.id, patient.age);
    println!("{} <{}>", patient.injury, patient.email);
    println!(
        "Started {}; status {}; physio {}",
        patient.start_date,
        patient.status.label(),
        patient.physio_name
    );
    println!();
    for log in patient.recent_logs(RECENT_LOGS) {
        println!(
            "{:<16} {}  ROM {:>3}°  pain {:>2}  reps {:>2}  {}",
            log.id,
            log.date,
            log.max_rom,
            log.pain_score.value(),
            log.reps_completed,
            log.notes.as_deref().unwrap_or("")
        );
        if let Some(analysis) = &log.voice_analysis {
            println!("{:<16} voice: {analysis}", "");
        }
    }
    Ok(())
}

fn chart<M: GenerativeModel>(app: &App<M>) -> Result<()> {
    let points = app.chart()?;
    if points.is_empty() {
        println!("No sessions logged yet.");
        return Ok(());
    }
    println!("date   ROM  benchmark  pain");
    for point in points {
        println!(
            "{}  {:>3}  {:>9}  {:>4}",
            point.label, point.rom, point.benchmark, point.pain
        );
    }
    Ok(())
}

async fn edit_log<M: GenerativeModel>(app: &mut App<M>, args: EditLogArgs) -> Result<()> {
    let edit = LogEdit {
        max_rom: args.rom,
        pain_score: PainScore::new(args.pain)?,
    };
    app.edit_log(&args.log_id, edit).await?;
    println!("Log {} updated.", args.log_id);
    Ok(())
}

async fn report<M: GenerativeModel>(app: &mut App<M>, args: ReportArgs) -> Result<()> {
    let report = app.add_report(args.title, &args.content, today()).await?;
    println!("Sent \"{}\" ({}).", report.title, report.date);
    Ok(())
}

async fn new_case<M: GenerativeModel>(app: &mut App<M>, args: NewCaseArgs) -> Result<()> {
    let details = NewCaseDetails {
        name: args.name,
        age: args.age,
        injury_type: args.injury,
    };
    let patient = app
        .create_case(&args.phone, &args.otp, details, today())
        .await?;
    println!(
        "Created case {} for {} ({}). Invite sent to {}.",
        patient.id, patient.name, patient.injury, patient.email
    );
    Ok(())
}
