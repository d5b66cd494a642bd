use serde::{Deserialize, Serialize};

/// Static reference data describing an injury classification. Only used to
/// template AI prompts and to label new cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub typical_recovery_weeks: u32,
    pub expected_milestones: Vec<String>,
}

impl InjuryProfile {
    /// Milestones on one line, `; `-separated.
    pub fn milestone_summary(&self) -> String {
        self.expected_milestones.join("; ")
    }
}
