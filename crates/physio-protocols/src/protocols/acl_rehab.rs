use std::sync::LazyLock;

use physio_core::models::exercise::Exercise;
use physio_core::models::injury::InjuryProfile;

use crate::Protocol;

/// Anterior cruciate ligament reconstruction, post-op.
pub struct AclRehab;

pub(crate) static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![Exercise {
        id: "k1".to_string(),
        name: "Heel Slides".to_string(),
        target_reps: 10,
        target_rom: 110,
        instructions: "Lie on back. Slide heel towards buttocks.".to_string(),
    }]
});

impl Protocol for AclRehab {
    fn profile(&self) -> &InjuryProfile {
        static PROFILE: LazyLock<InjuryProfile> = LazyLock::new(|| InjuryProfile {
            id: "acl_rehab".to_string(),
            name: "ACL Reconstruction (Post-Op)".to_string(),
            description: "Standard protocol for anterior cruciate ligament reconstruction.".to_string(),
            typical_recovery_weeks: 24,
            expected_milestones: vec![
                "Week 2: 90° flexion, full extension".to_string(),
                "Week 6: Full ROM, normal gait".to_string(),
                "Week 12: Jogging initiation".to_string(),
            ],
        });
        &PROFILE
    }

    fn exercises(&self) -> &[Exercise] {
        &EXERCISES
    }

    fn benchmarks(&self) -> &[u32] {
        &[60, 75, 90, 100, 110, 120]
    }
}
