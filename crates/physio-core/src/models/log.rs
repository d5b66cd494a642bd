use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Self-reported pain on a 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PainScore(u8);

impl PainScore {
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::InvalidPainScore(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for PainScore {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for PainScore {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PainScore> for u8 {
    fn from(score: PainScore) -> Self {
        score.0
    }
}

impl fmt::Display for PainScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged exercise session.
///
/// Immutable once created, except for the clinician-editable ROM and pain
/// fields (see [`LogEdit`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: String,
    pub date: jiff::civil::Date,
    pub pain_score: PainScore,
    /// Peak range of motion achieved, in degrees.
    pub max_rom: u32,
    pub reps_completed: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    /// Recorded audio as a `data:<mime>;base64,` URI.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub voice_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub voice_analysis: Option<String>,
}

/// The fields a clinician may correct on an existing log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEdit {
    pub max_rom: u32,
    pub pain_score: PainScore,
}
