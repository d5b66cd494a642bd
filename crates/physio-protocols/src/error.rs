use physio_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown injury protocol: {0}")]
    UnknownProtocol(String),

    #[error("License ID not found in the national registry.")]
    UnknownLicense(String),

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Invalid OTP. (Hint: Use 1234)")]
    InvalidOtp,

    #[error("patient name must not be empty")]
    MissingName,

    #[error("onboarding step {step} cannot {action}")]
    OutOfOrder {
        step: &'static str,
        action: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
