use std::sync::LazyLock;

use physio_core::models::exercise::Exercise;
use physio_core::models::injury::InjuryProfile;

use crate::Protocol;

/// Adhesive capsulitis.
pub struct FrozenShoulder;

impl Protocol for FrozenShoulder {
    fn profile(&self) -> &InjuryProfile {
        static PROFILE: LazyLock<InjuryProfile> = LazyLock::new(|| InjuryProfile {
            id: "frozen_shoulder".to_string(),
            name: "Adhesive Capsulitis (Frozen Shoulder)".to_string(),
            description: "Focus on gradual stretching to restore range of motion.".to_string(),
            typical_recovery_weeks: 12,
            expected_milestones: vec![
                "Week 2: Pain reduction".to_string(),
                "Week 6: Improved external rotation".to_string(),
                "Week 12: Functional overhead reach".to_string(),
            ],
        });
        &PROFILE
    }

    fn exercises(&self) -> &[Exercise] {
        static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
            vec![
                Exercise {
                    id: "s1".to_string(),
                    name: "Wall Crawl".to_string(),
                    target_reps: 8,
                    target_rom: 120,
                    instructions: "Walk fingers up the wall as high as possible without pain.".to_string(),
                },
                Exercise {
                    id: "s2".to_string(),
                    name: "Pendulum Swing".to_string(),
                    target_reps: 20,
                    target_rom: 0,
                    instructions: "Lean forward and let arm hang loose. Swing gently in circles.".to_string(),
                },
            ]
        });
        &EXERCISES
    }

    fn benchmarks(&self) -> &[u32] {
        &[45, 60, 80, 100, 130, 150]
    }
}
