use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub target_reps: u32,
    /// Target range of motion in degrees. Zero for exercises that are not
    /// measured by angle.
    pub target_rom: u32,
    pub instructions: String,
}
