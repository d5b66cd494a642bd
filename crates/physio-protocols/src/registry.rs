//! Verified physiotherapists, keyed by medical licence id.

use physio_core::models::clinician::Clinician;
use tracing::{info, warn};

use crate::error::ProtocolError;

const VERIFIED: &[(&str, &str, &str)] = &[
    ("PT-88321", "Dr. Shrikant Tiwari", "PHY-1001"),
    ("PT-99402", "Dr. Sarah Connor", "PHY-2022"),
];

/// Resolve a licence id to its clinician.
pub fn verify_license(license_id: &str) -> Result<Clinician, ProtocolError> {
    let license_id = license_id.trim();
    match VERIFIED.iter().find(|(license, ..)| *license == license_id) {
        Some((_, name, id)) => {
            info!(clinician_id = id, "clinician licence verified");
            Ok(Clinician {
                name: name.to_string(),
                id: id.to_string(),
            })
        }
        None => {
            warn!(license_id, "licence not in registry");
            Err(ProtocolError::UnknownLicense(license_id.to_string()))
        }
    }
}
