//! Storage media.
//!
//! Each backend maps a fixed string key to one opaque blob. `Local` survives
//! restarts, `Session` lives only as long as the process, `S3` keeps objects
//! under a prefix in a bucket.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use physio_core::storage_keys;
use tracing::debug;

use crate::error::StorageError;
use crate::objects;

#[derive(Clone)]
pub enum StorageBackend {
    Local {
        dir: PathBuf,
    },
    Session {
        entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    },
    S3 {
        client: aws_sdk_s3::Client,
        bucket: String,
        prefix: String,
    },
}

impl StorageBackend {
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        StorageBackend::Local { dir: dir.into() }
    }

    pub fn session() -> Self {
        StorageBackend::Session {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn s3(client: aws_sdk_s3::Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        StorageBackend::S3 {
            client,
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StorageBackend::Local { .. } => "local",
            StorageBackend::Session { .. } => "session",
            StorageBackend::S3 { .. } => "s3",
        }
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        debug!(backend = self.kind(), key, "get");
        match self {
            StorageBackend::Local { dir } => {
                let path = file_path(dir, key);
                tokio::fs::read(&path).await.map_err(|e| {
                    if e.kind() == ErrorKind::NotFound {
                        StorageError::NotFound {
                            key: key.to_string(),
                        }
                    } else {
                        StorageError::Read {
                            key: key.to_string(),
                            message: e.to_string(),
                        }
                    }
                })
            }
            StorageBackend::Session { entries } => {
                let value = lock(entries, key)?.get(key).cloned();
                value.ok_or_else(|| StorageError::NotFound {
                    key: key.to_string(),
                })
            }
            StorageBackend::S3 {
                client,
                bucket,
                prefix,
            } => objects::get_object(client, bucket, &storage_keys::namespaced(prefix, key)).await,
        }
    }

    pub async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        debug!(backend = self.kind(), key, bytes = body.len(), "put");
        match self {
            StorageBackend::Local { dir } => write_atomic(dir, key, &body).await,
            StorageBackend::Session { entries } => {
                lock(entries, key)?.insert(key.to_string(), body);
                Ok(())
            }
            StorageBackend::S3 {
                client,
                bucket,
                prefix,
            } => {
                objects::put_object(
                    client,
                    bucket,
                    &storage_keys::namespaced(prefix, key),
                    body,
                    Some("application/json"),
                )
                .await
            }
        }
    }

    /// Remove a key. Removing a missing key succeeds.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        debug!(backend = self.kind(), key, "delete");
        match self {
            StorageBackend::Local { dir } => match tokio::fs::remove_file(file_path(dir, key)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Delete {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            },
            StorageBackend::Session { entries } => {
                lock(entries, key)?.remove(key);
                Ok(())
            }
            StorageBackend::S3 {
                client,
                bucket,
                prefix,
            } => objects::delete_object(client, bucket, &storage_keys::namespaced(prefix, key)).await,
        }
    }
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Local { dir } => f.debug_struct("Local").field("dir", dir).finish(),
            StorageBackend::Session { .. } => f.write_str("Session"),
            StorageBackend::S3 { bucket, prefix, .. } => f
                .debug_struct("S3")
                .field("bucket", bucket)
                .field("prefix", prefix)
                .finish(),
        }
    }
}

fn file_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

fn lock<'a>(
    entries: &'a Mutex<HashMap<String, Vec<u8>>>,
    key: &str,
) -> Result<std::sync::MutexGuard<'a, HashMap<String, Vec<u8>>>, StorageError> {
    entries.lock().map_err(|e| StorageError::Read {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Write to a temp file then rename, so a crash never leaves half a roster.
async fn write_atomic(dir: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let write_err = |e: std::io::Error| StorageError::Write {
        key: key.to_string(),
        message: e.to_string(),
    };
    tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
    let path = file_path(dir, key);
    let tmp_path = dir.join(format!("{key}.json.tmp"));
    tokio::fs::write(&tmp_path, body).await.map_err(write_err)?;
    tokio::fs::rename(&tmp_path, &path).await.map_err(write_err)?;
    Ok(())
}
