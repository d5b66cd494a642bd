//! Screen selection.
//!
//! The active user's position in the app is a single [`Screen`] value.
//! Transitions consume the current screen and either return the next one or
//! reject the move with [`CoreError::InvalidTransition`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::clinician::Clinician;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Landing,
    Registering,
    ClinicianLogin,
    PatientView {
        patient_id: String,
    },
    ClinicianView {
        clinician: Clinician,
        /// `None` only when the roster is empty.
        selected_patient_id: Option<String>,
    },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Registering => "registration",
            Screen::ClinicianLogin => "clinician login",
            Screen::PatientView { .. } => "patient",
            Screen::ClinicianView { .. } => "clinician",
        }
    }

    pub fn begin_registration(self) -> Result<Screen, CoreError> {
        match self {
            Screen::Landing => Ok(Screen::Registering),
            other => Err(other.reject("begin registration")),
        }
    }

    pub fn begin_clinician_login(self) -> Result<Screen, CoreError> {
        match self {
            Screen::Landing => Ok(Screen::ClinicianLogin),
            other => Err(other.reject("begin clinician login")),
        }
    }

    /// Finish registration as the given patient.
    pub fn enter_patient_view(self, patient_id: impl Into<String>) -> Result<Screen, CoreError> {
        match self {
            Screen::Registering => Ok(Screen::PatientView {
                patient_id: patient_id.into(),
            }),
            other => Err(other.reject("enter the patient view")),
        }
    }

    /// Finish clinician login, selecting `first_patient_id` if any.
    pub fn enter_clinician_view(
        self,
        clinician: Clinician,
        first_patient_id: Option<String>,
    ) -> Result<Screen, CoreError> {
        match self {
            Screen::ClinicianLogin => Ok(Screen::ClinicianView {
                clinician,
                selected_patient_id: first_patient_id,
            }),
            other => Err(other.reject("enter the clinician view")),
        }
    }

    pub fn select_patient(self, patient_id: impl Into<String>) -> Result<Screen, CoreError> {
        match self {
            Screen::ClinicianView { clinician, .. } => Ok(Screen::ClinicianView {
                clinician,
                selected_patient_id: Some(patient_id.into()),
            }),
            other => Err(other.reject("select a patient")),
        }
    }

    /// Sign out from anywhere.
    pub fn reset(self) -> Screen {
        Screen::Landing
    }

    pub fn patient_id(&self) -> Option<&str> {
        match self {
            Screen::PatientView { patient_id } => Some(patient_id),
            _ => None,
        }
    }

    pub fn clinician(&self) -> Option<&Clinician> {
        match self {
            Screen::ClinicianView { clinician, .. } => Some(clinician),
            _ => None,
        }
    }

    pub fn selected_patient_id(&self) -> Option<&str> {
        match self {
            Screen::ClinicianView {
                selected_patient_id,
                ..
            } => selected_patient_id.as_deref(),
            _ => None,
        }
    }

    fn reject(&self, action: &'static str) -> CoreError {
        CoreError::InvalidTransition {
            from: self.name(),
            action,
        }
    }
}
