//! Persisted session-token storage.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Fixed key the session token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Single-slot storage for the session token.
///
/// Writes are best-effort: implementations log failures rather than
/// returning them, matching browser `localStorage` semantics.
pub trait TokenStore {
    /// Current token, or `None` when absent or blank.
    fn load(&self) -> Option<String>;
    /// Replace the stored token.
    fn save(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Process-local token store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clone().filter(|t| !t.trim().is_empty())
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}
