//! Session State Store: the roster and the active user's screen.

use physio_core::roster::Roster;
use physio_core::router::Screen;
use physio_core::storage_keys;
use tracing::info;

use crate::backend::StorageBackend;
use crate::error::StorageError;
use crate::state;

#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: StorageBackend,
}

impl SessionStore {
    pub fn new(backend: StorageBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &StorageBackend {
        &self.backend
    }

    /// Load the roster, or `seed()` if nothing usable is stored.
    pub async fn load_roster(&self, seed: impl FnOnce() -> Roster) -> Roster {
        let roster = state::load_state_or_else(&self.backend, storage_keys::ROSTER, seed).await;
        info!(patients = roster.len(), backend = self.backend.kind(), "roster loaded");
        roster
    }

    /// Persist the entire roster.
    pub async fn save_roster(&self, roster: &Roster) -> Result<(), StorageError> {
        state::save_state(&self.backend, storage_keys::ROSTER, roster).await
    }

    pub async fn load_screen(&self) -> Screen {
        state::load_state_or_else(&self.backend, storage_keys::SESSION, Screen::default).await
    }

    pub async fn save_screen(&self, screen: &Screen) -> Result<(), StorageError> {
        state::save_state(&self.backend, storage_keys::SESSION, screen).await
    }

    /// Drop everything under the fixed keys.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.backend.delete(storage_keys::ROSTER).await?;
        self.backend.delete(storage_keys::SESSION).await
    }
}
