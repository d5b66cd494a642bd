use eyre::Result;
use physio_core::router::Screen;
use physio_gateway::model::GenerativeModel;
use physio_protocols::registration::{RegistrationDetails, RegistrationOutcome};

use crate::app::App;
use crate::cli::RegisterArgs;

pub async fn register<M: GenerativeModel>(app: &mut App<M>, args: RegisterArgs) -> Result<()> {
    let details = RegistrationDetails {
        name: args.name,
        age: args.age,
        email: args.email,
        physio_name: args.physio,
    };
    let outcome = app.register(details).await?;
    let patient = app.current_patient()?;
    match outcome {
        RegistrationOutcome::Existing { .. } => {
            println!("Welcome back, {}.", patient.name);
        }
        RegistrationOutcome::Created { .. } => {
            println!("Registered {} ({}).", patient.name, patient.id);
        }
    }
    println!("{}", app.motivation().await?);
    Ok(())
}

pub async fn login<M: GenerativeModel>(app: &mut App<M>, license: &str) -> Result<()> {
    let clinician = app.login(license).await?;
    println!("Signed in as {} ({}).", clinician.name, clinician.id);
    if let Ok(patient) = app.selected_patient() {
        println!("Selected patient: {} ({})", patient.name, patient.id);
    }
    Ok(())
}

pub async fn logout<M: GenerativeModel>(app: &mut App<M>) -> Result<()> {
    app.logout().await?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami<M: GenerativeModel>(app: &App<M>) -> Result<()> {
    match app.screen() {
        Screen::PatientView { .. } => {
            let patient = app.current_patient()?;
            println!("Patient {} <{}> ({})", patient.name, patient.email, patient.id);
        }
        Screen::ClinicianView { clinician, .. } => {
            println!("Clinician {} ({})", clinician.name, clinician.id);
            if let Ok(patient) = app.selected_patient() {
                println!("Selected patient: {} ({})", patient.name, patient.id);
            }
        }
        other => println!("Not signed in ({} screen).", other.name()),
    }
    Ok(())
}
