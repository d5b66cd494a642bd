//! Storage key conventions.
//!
//! Every backend stores whole JSON objects under these fixed names. There is
//! no schema versioning beyond the suffix baked into each key.

/// The full patient roster.
pub const ROSTER: &str = "physio_app_data_v1";

/// The active user's screen.
pub const SESSION: &str = "physio_app_session_v1";

/// Join a backend namespace prefix and a key. An empty prefix yields the
/// bare key.
pub fn namespaced(prefix: &str, key: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}/{key}")
    }
}
