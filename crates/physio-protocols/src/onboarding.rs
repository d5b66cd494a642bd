//! Clinician-driven case creation.
//!
//! Three steps: mobile number, one-time password, then patient details and
//! injury classification. The new patient's exercise plan and benchmarks are
//! taken verbatim from the selected protocol.

use jiff::civil::Date;
use physio_core::models::patient::{Patient, PatientStatus};
use tracing::info;
use uuid::Uuid;

use crate::error::ProtocolError;
use crate::get_protocol;

/// The demo OTP accepted by the wizard.
pub const DEMO_OTP: &str = "1234";

const MIN_PHONE_LEN: usize = 10;
const DEFAULT_AGE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingWizard {
    #[default]
    EnterPhone,
    EnterOtp {
        phone: String,
    },
    EnterDetails {
        phone: String,
    },
}

#[derive(Debug, Clone)]
pub struct NewCaseDetails {
    pub name: String,
    /// Free text; unparsable values fall back to a default age.
    pub age: String,
    pub injury_type: String,
}

impl OnboardingWizard {
    pub fn step(&self) -> u8 {
        match self {
            OnboardingWizard::EnterPhone => 1,
            OnboardingWizard::EnterOtp { .. } => 2,
            OnboardingWizard::EnterDetails { .. } => 3,
        }
    }

    fn step_name(&self) -> &'static str {
        match self {
            OnboardingWizard::EnterPhone => "phone",
            OnboardingWizard::EnterOtp { .. } => "otp",
            OnboardingWizard::EnterDetails { .. } => "details",
        }
    }

    pub fn send_otp(self, phone: &str) -> Result<Self, ProtocolError> {
        let OnboardingWizard::EnterPhone = self else {
            return Err(self.out_of_order("send an OTP"));
        };
        let phone = phone.trim();
        if phone.chars().count() < MIN_PHONE_LEN {
            return Err(ProtocolError::InvalidPhone);
        }
        info!("onboarding OTP sent");
        Ok(OnboardingWizard::EnterOtp {
            phone: phone.to_string(),
        })
    }

    pub fn verify_otp(self, code: &str) -> Result<Self, ProtocolError> {
        match self {
            OnboardingWizard::EnterOtp { phone } => {
                if code.trim() != DEMO_OTP {
                    // Stay on the OTP step; the caller may retry.
                    return Err(ProtocolError::InvalidOtp);
                }
                Ok(OnboardingWizard::EnterDetails { phone })
            }
            other => Err(other.out_of_order("verify an OTP")),
        }
    }

    /// Build the new patient. The caller adds it to the roster.
    pub fn create_case(
        self,
        details: NewCaseDetails,
        clinician_name: &str,
        today: Date,
    ) -> Result<Patient, ProtocolError> {
        let OnboardingWizard::EnterDetails { .. } = self else {
            return Err(self.out_of_order("create a case"));
        };
        let protocol = get_protocol(&details.injury_type)
            .ok_or_else(|| ProtocolError::UnknownProtocol(details.injury_type.clone()))?;
        let name = details.name.trim();
        if name.is_empty() {
            return Err(ProtocolError::MissingName);
        }

        let patient = Patient {
            id: format!("p{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            age: details.age.trim().parse().unwrap_or(DEFAULT_AGE),
            email: demo_email(name),
            physio_name: clinician_name.to_string(),
            injury: protocol.name().to_string(),
            injury_type: protocol.id().to_string(),
            start_date: today,
            status: PatientStatus::OnTrack,
            prescribed_exercises: protocol.exercises().to_vec(),
            logs: Vec::new(),
            benchmark_rom: protocol.benchmarks().to_vec(),
            weekly_reports: Vec::new(),
        };
        info!(patient_id = %patient.id, protocol = protocol.id(), "case created");
        Ok(patient)
    }

    fn out_of_order(&self, action: &'static str) -> ProtocolError {
        ProtocolError::OutOfOrder {
            step: self.step_name(),
            action,
        }
    }
}

/// Lowercased name with its first space turned into a dot.
pub fn demo_email(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replacen(' ', ".", 1))
}
