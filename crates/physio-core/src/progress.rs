//! Derived views over a patient's logs: chart points and the suggested
//! report title.

use serde::{Deserialize, Serialize};

use crate::models::patient::Patient;

/// One point on the ROM-vs-benchmark chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// `MM/DD` of the log date.
    pub label: String,
    pub rom: u32,
    pub pain: u8,
    pub benchmark: u32,
}

/// One point per log. Logs past the end of the benchmark sequence are
/// compared against its last value.
pub fn chart_points(patient: &Patient) -> Vec<ChartPoint> {
    let benchmarks = &patient.benchmark_rom;
    patient
        .logs
        .iter()
        .enumerate()
        .map(|(i, log)| {
            let benchmark = if benchmarks.is_empty() {
                0
            } else {
                benchmarks[i.min(benchmarks.len() - 1)]
            };
            ChartPoint {
                label: format!("{:02}/{:02}", log.date.month(), log.date.day()),
                rom: log.max_rom,
                pain: log.pain_score.value(),
                benchmark,
            }
        })
        .collect()
}

/// Approximate weeks in treatment, assuming three sessions a week.
pub fn weeks_since_start(patient: &Patient) -> f64 {
    patient.logs.len() as f64 / 3.0
}

pub fn suggested_report_title(patient: &Patient) -> String {
    format!("Week {} Update", patient.logs.len().div_ceil(3))
}
