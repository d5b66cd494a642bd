//! physio-core
//!
//! Pure domain types, roster mutation rules, the view router and storage key
//! conventions. No network or storage dependency. This is the shared
//! vocabulary of the tracker.

pub mod audio;
pub mod error;
pub mod models;
pub mod progress;
pub mod roster;
pub mod router;
pub mod storage_keys;
