//! physio-protocols
//!
//! Injury protocol definitions and the other static reference data of the
//! clinic: the verified clinician registry and the seed roster. Also hosts
//! the registration and onboarding flows, which are driven by that data.

pub mod error;
pub mod onboarding;
pub mod protocols;
pub mod registration;
pub mod registry;
pub mod seed;

use physio_core::models::exercise::Exercise;
use physio_core::models::injury::InjuryProfile;

/// Trait implemented by each injury protocol.
pub trait Protocol: Send + Sync {
    /// Descriptive profile used for prompts and case labels.
    fn profile(&self) -> &InjuryProfile;

    /// The prescribed exercise plan.
    fn exercises(&self) -> &[Exercise];

    /// Expected ROM per week, in degrees.
    fn benchmarks(&self) -> &[u32];

    /// Unique identifier (e.g., "acl_rehab").
    fn id(&self) -> &str {
        &self.profile().id
    }

    fn name(&self) -> &str {
        &self.profile().name
    }
}

/// Return all registered protocols.
pub fn all_protocols() -> Vec<Box<dyn Protocol>> {
    vec![
        Box::new(protocols::wrist_post_cast::WristPostCast),
        Box::new(protocols::acl_rehab::AclRehab),
        Box::new(protocols::frozen_shoulder::FrozenShoulder),
    ]
}

/// Look up a protocol by injury classification.
pub fn get_protocol(id: &str) -> Option<Box<dyn Protocol>> {
    all_protocols().into_iter().find(|p| p.id() == id)
}

/// The classification the onboarding wizard offers first.
pub fn default_protocol_id() -> &'static str {
    "wrist_post_cast"
}
