use serde::{Deserialize, Serialize};

/// A verified physiotherapist, resolved from a medical licence id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinician {
    pub name: String,
    pub id: String,
}
