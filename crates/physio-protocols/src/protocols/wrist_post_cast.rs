use std::sync::LazyLock;

use physio_core::models::exercise::Exercise;
use physio_core::models::injury::InjuryProfile;

use crate::Protocol;

/// Distal radius fracture, after six weeks in a cast.
pub struct WristPostCast;

pub(crate) static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        Exercise {
            id: "w1".to_string(),
            name: "Wrist Flexion/Extension".to_string(),
            target_reps: 15,
            target_rom: 45,
            instructions: "Place forearm on table, hand hanging off edge. Gently move hand up and down.".to_string(),
        },
        Exercise {
            id: "w2".to_string(),
            name: "Towel Wring".to_string(),
            target_reps: 10,
            target_rom: 0,
            instructions: "Hold a rolled towel. Twist hands in opposite directions simulating wringing water.".to_string(),
        },
    ]
});

impl Protocol for WristPostCast {
    fn profile(&self) -> &InjuryProfile {
        static PROFILE: LazyLock<InjuryProfile> = LazyLock::new(|| InjuryProfile {
            id: "wrist_post_cast".to_string(),
            name: "Distal Radius Fracture (Post-Cast)".to_string(),
            description: "Rehabilitation following 6 weeks of immobilization for wrist fracture.".to_string(),
            typical_recovery_weeks: 8,
            expected_milestones: vec![
                "Week 1: Gentle active ROM, 30° flexion/extension".to_string(),
                "Week 3: 50% normal ROM, begin light gripping".to_string(),
                "Week 6: Near full ROM, strengthening exercises".to_string(),
                "Week 8: Return to normal load bearing".to_string(),
            ],
        });
        &PROFILE
    }

    fn exercises(&self) -> &[Exercise] {
        &EXERCISES
    }

    fn benchmarks(&self) -> &[u32] {
        &[30, 40, 50, 60, 70, 75, 80]
    }
}
