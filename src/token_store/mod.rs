//! # Token Store
//!
//! Persistent client-side key/value storage for the session token and user id,
//! the counterpart of a browser's local storage.
//!
//! Only two keys are used: [`TOKEN_KEY`] and [`USER_ID_KEY`]. The presence of a
//! non-empty token is the sole signal the [`RouteGuard`](crate::guard::RouteGuard) reads.

pub mod file;

pub use file::FileTokenStore;

use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "token";

/// Key under which the logged-in user's id is stored.
pub const USER_ID_KEY: &str = "userId";

/// Errors raised by a token store backend.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError>;
    fn remove(&self, key: &str) -> Result<(), TokenStoreError>;

    /// The stored token, with an empty string treated as absent.
    fn token(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.get(TOKEN_KEY)?.filter(|token| !token.is_empty()))
    }

    /// The stored user id, with an empty string treated as absent.
    fn user_id(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.get(USER_ID_KEY)?.filter(|id| !id.is_empty()))
    }
}

/// In-memory token store. Forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.entries.write().insert(TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token().unwrap(), None);

        store.set(TOKEN_KEY, "abc").unwrap();
        store.set(USER_ID_KEY, "42").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("abc"));
        assert_eq!(store.user_id().unwrap().as_deref(), Some("42"));

        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.get(USER_ID_KEY).unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryTokenStore::with_token("");
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some(""));
        assert_eq!(store.token().unwrap(), None);
    }
}
