use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::backend::StorageBackend;
use crate::error::StorageError;

/// Load a JSON state object.
pub async fn load_state<T: DeserializeOwned>(
    backend: &StorageBackend,
    key: &str,
) -> Result<T, StorageError> {
    let body = backend.get(key).await?;
    let value = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Load a JSON state object, substituting `fallback()` when the key is
/// missing, unreadable or malformed. The failure is logged, never returned.
pub async fn load_state_or_else<T: DeserializeOwned>(
    backend: &StorageBackend,
    key: &str,
    fallback: impl FnOnce() -> T,
) -> T {
    match load_state(backend, key).await {
        Ok(value) => value,
        Err(StorageError::NotFound { .. }) => fallback(),
        Err(e) => {
            warn!(key, error = %e, "discarding stored state");
            fallback()
        }
    }
}

/// Save a JSON state object, replacing whatever was stored.
pub async fn save_state<T: Serialize>(
    backend: &StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    backend.put(key, body).await
}
