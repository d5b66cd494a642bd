//! Patient self-registration.
//!
//! A registration whose email matches an existing patient signs that patient
//! in. Otherwise a new patient is created from the registration template
//! with empty logs and reports and placed at the front of the roster.

use physio_core::roster::Roster;
use physio_core::router::Screen;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ProtocolError;
use crate::seed;

const DEFAULT_AGE: u32 = 25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationDetails {
    pub name: String,
    /// Free text as typed; unparsable values fall back to a default age.
    pub age: String,
    pub email: String,
    pub physio_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Existing { patient_id: String },
    Created { patient_id: String },
}

impl RegistrationOutcome {
    pub fn patient_id(&self) -> &str {
        match self {
            RegistrationOutcome::Existing { patient_id }
            | RegistrationOutcome::Created { patient_id } => patient_id,
        }
    }
}

/// Complete registration from the `Registering` screen.
pub fn register_patient(
    roster: Roster,
    screen: Screen,
    details: RegistrationDetails,
) -> Result<(Roster, Screen, RegistrationOutcome), ProtocolError> {
    if let Some(existing) = roster.find_by_email(&details.email) {
        let patient_id = existing.id.clone();
        let screen = screen.enter_patient_view(patient_id.clone())?;
        info!(patient_id, "registration matched existing patient");
        return Ok((roster, screen, RegistrationOutcome::Existing { patient_id }));
    }

    if details.name.trim().is_empty() {
        return Err(ProtocolError::MissingName);
    }

    let mut patient = seed::registration_template();
    patient.id = format!("p{}", Uuid::new_v4().simple());
    patient.name = details.name.trim().to_string();
    patient.age = details.age.trim().parse().unwrap_or(DEFAULT_AGE);
    patient.email = details.email.trim().to_string();
    patient.physio_name = details.physio_name.trim().to_string();

    let patient_id = patient.id.clone();
    let screen = screen.enter_patient_view(patient_id.clone())?;
    let roster = roster.with_new_patient(patient)?;
    info!(patient_id, "new patient registered");

    Ok((roster, screen, RegistrationOutcome::Created { patient_id }))
}
