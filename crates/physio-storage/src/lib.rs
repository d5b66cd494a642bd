//! physio-storage
//!
//! Whole-object JSON persistence over a namespaced key/value medium: a local
//! directory, in-process session memory, or an S3 bucket.

pub mod backend;
pub mod client;
pub mod error;
pub mod objects;
pub mod state;
pub mod store;
