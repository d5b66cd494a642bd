//! physio-sensor
//!
//! Simulated motion tracking for exercise sessions. The angle is a clamped
//! random walk and reps arrive at random; this drives the session display
//! and nothing else. The exact distribution is not a contract.

pub mod feed;
pub mod session;
