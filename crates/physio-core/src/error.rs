use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("patient not found: {0}")]
    PatientNotFound(String),

    #[error("duplicate patient id: {0}")]
    DuplicatePatient(String),

    #[error("log {log_id} not found for patient {patient_id}")]
    LogNotFound { patient_id: String, log_id: String },

    #[error("duplicate log id {log_id} for patient {patient_id}")]
    DuplicateLog { patient_id: String, log_id: String },

    #[error("pain score {0} is outside range [0, 10]")]
    InvalidPainScore(u8),

    #[error("report content must not be empty")]
    EmptyReport,

    #[error("cannot {action} from the {from} screen")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}
