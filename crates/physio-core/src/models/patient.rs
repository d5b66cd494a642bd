use serde::{Deserialize, Serialize};

use crate::models::exercise::Exercise;
use crate::models::log::SessionLog;
use crate::models::report::WeeklyReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub physio_name: String,
    /// Display name of the injury.
    pub injury: String,
    /// Key into the injury protocol library.
    pub injury_type: String,
    pub start_date: jiff::civil::Date,
    pub status: PatientStatus,
    pub prescribed_exercises: Vec<Exercise>,
    pub logs: Vec<SessionLog>,
    /// Expected ROM per week, in degrees.
    pub benchmark_rom: Vec<u32>,
    pub weekly_reports: Vec<WeeklyReport>,
}

impl Patient {
    pub fn latest_log(&self) -> Option<&SessionLog> {
        self.logs.last()
    }

    /// The last `n` logs in chronological order.
    pub fn recent_logs(&self, n: usize) -> &[SessionLog] {
        let start = self.logs.len().saturating_sub(n);
        &self.logs[start..]
    }

    pub fn reports_newest_first(&self) -> impl Iterator<Item = &WeeklyReport> {
        self.weekly_reports.iter().rev()
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.prescribed_exercises.iter().find(|e| e.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    Behind,
    Ahead,
}

impl PatientStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::OnTrack => "On Track",
            PatientStatus::Behind => "Behind",
            PatientStatus::Ahead => "Ahead",
        }
    }
}
