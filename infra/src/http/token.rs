//! Session token storage
//!
//! Holds the bearer token issued at login. The store is an explicit value
//! passed to the transport rather than ambient global state, so transports
//! under test (or multiple sessions) stay isolated.

use std::sync::{Arc, RwLock};

/// Thread-safe in-memory bearer token cell
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token issued at login
    pub fn set(&self, token: impl Into<String>) {
        *self.write() = Some(token.into());
    }

    /// Current token, if any
    pub fn get(&self) -> Option<String> {
        self.read().clone()
    }

    /// Discard the token (logout, or session invalidated by the server)
    pub fn clear(&self) {
        *self.write() = None;
    }

    pub fn is_present(&self) -> bool {
        self.read().is_some()
    }

    // A poisoned lock only means a panic elsewhere mid-write of an
    // Option<String>; the value is still usable.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<String>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
