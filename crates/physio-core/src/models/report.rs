use serde::{Deserialize, Serialize};

/// Clinician feedback attached to a patient. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub id: String,
    pub date: jiff::civil::Date,
    pub title: String,
    pub content: String,
    pub physio_name: String,
}
