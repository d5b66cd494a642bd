//! The patient roster and its mutation rules.
//!
//! Every mutation consumes the roster and returns the next one, so callers
//! hold an explicit state value instead of sharing a mutable global. Patient
//! ids are unique: a roster cannot be built or deserialized with duplicates,
//! and updates replace the matching entry in place.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CoreError;
use crate::models::log::{LogEdit, SessionLog};
use crate::models::patient::{Patient, PatientStatus};
use crate::models::report::WeeklyReport;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Patient>", into = "Vec<Patient>")]
pub struct Roster {
    patients: Vec<Patient>,
}

impl Roster {
    pub fn new(patients: Vec<Patient>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for p in &patients {
            if !seen.insert(p.id.as_str()) {
                return Err(CoreError::DuplicatePatient(p.id.clone()));
            }
        }
        Ok(Self { patients })
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn first(&self) -> Option<&Patient> {
        self.patients.first()
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Patient, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::PatientNotFound(id.to_string()))
    }

    /// Case-insensitive email lookup.
    pub fn find_by_email(&self, email: &str) -> Option<&Patient> {
        let needle = email.to_lowercase();
        self.patients
            .iter()
            .find(|p| p.email.to_lowercase() == needle)
    }

    /// Add a new patient at the front of the roster.
    pub fn with_new_patient(mut self, patient: Patient) -> Result<Self, CoreError> {
        if self.get(&patient.id).is_some() {
            return Err(CoreError::DuplicatePatient(patient.id));
        }
        info!(patient_id = %patient.id, "patient added to roster");
        self.patients.insert(0, patient);
        Ok(self)
    }

    /// Append a session log to the end of a patient's log sequence.
    pub fn with_log_appended(self, patient_id: &str, log: SessionLog) -> Result<Self, CoreError> {
        let roster = self.update(patient_id, |p| {
            if p.logs.iter().any(|l| l.id == log.id) {
                return Err(CoreError::DuplicateLog {
                    patient_id: p.id.clone(),
                    log_id: log.id.clone(),
                });
            }
            p.logs.push(log);
            Ok(())
        })?;
        info!(patient_id, "session log appended");
        Ok(roster)
    }

    /// Overwrite the ROM and pain fields of a single log.
    pub fn with_log_edited(
        self,
        patient_id: &str,
        log_id: &str,
        edit: LogEdit,
    ) -> Result<Self, CoreError> {
        let roster = self.update(patient_id, |p| {
            let log = p
                .logs
                .iter_mut()
                .find(|l| l.id == log_id)
                .ok_or_else(|| CoreError::LogNotFound {
                    patient_id: patient_id.to_string(),
                    log_id: log_id.to_string(),
                })?;
            log.max_rom = edit.max_rom;
            log.pain_score = edit.pain_score;
            Ok(())
        })?;
        info!(patient_id, log_id, "session log edited");
        Ok(roster)
    }

    pub fn with_report_appended(
        self,
        patient_id: &str,
        report: WeeklyReport,
    ) -> Result<Self, CoreError> {
        if report.content.trim().is_empty() {
            return Err(CoreError::EmptyReport);
        }
        let roster = self.update(patient_id, |p| {
            p.weekly_reports.push(report);
            Ok(())
        })?;
        info!(patient_id, "weekly report appended");
        Ok(roster)
    }

    /// Close a patient's active case: wipe logs and reports, reset status.
    pub fn with_patient_discharged(self, patient_id: &str) -> Result<Self, CoreError> {
        let roster = self.update(patient_id, |p| {
            p.logs.clear();
            p.weekly_reports.clear();
            p.status = PatientStatus::OnTrack;
            Ok(())
        })?;
        info!(patient_id, "patient discharged");
        Ok(roster)
    }

    fn update(
        mut self,
        patient_id: &str,
        f: impl FnOnce(&mut Patient) -> Result<(), CoreError>,
    ) -> Result<Self, CoreError> {
        let slot = self
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| CoreError::PatientNotFound(patient_id.to_string()))?;
        f(slot)?;
        Ok(self)
    }
}

impl TryFrom<Vec<Patient>> for Roster {
    type Error = CoreError;

    fn try_from(patients: Vec<Patient>) -> Result<Self, Self::Error> {
        Self::new(patients)
    }
}

impl From<Roster> for Vec<Patient> {
    fn from(roster: Roster) -> Self {
        roster.patients
    }
}
