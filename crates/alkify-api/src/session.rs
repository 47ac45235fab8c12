use std::sync::{Arc, Mutex};

use gloo_storage::{LocalStorage, Storage};

/// Storage key holding the raw bearer token string.
pub const TOKEN_KEY: &str = "jwt_token";

/// Where the session token lives. The browser implementation persists it;
/// the in-memory one backs tests and keeps the transport client free of
/// ambient storage lookups.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token persisted in `window.localStorage`, surviving page reloads for
/// the lifetime of the session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        let _ = LocalStorage::raw().set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        let _ = LocalStorage::raw().remove_item(TOKEN_KEY);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore(Mutex<Option<String>>);

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.lock().ok().and_then(|token| token.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = None;
        }
    }
}

/// Explicit session handle passed to the transport client at construction.
/// anonymous (no token) -> authenticated (token stored) -> anonymous
/// (token removed on logout). Server-side expiry is not observed here.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn browser() -> Self {
        Self::with_store(Arc::new(BrowserStore))
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::default()))
    }

    pub fn with_store(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn store_token(&self, token: &str) {
        self.store.set(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_anonymous_authenticated_anonymous() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.store_token("abc.def.ghi");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn storing_again_overwrites_the_previous_token() {
        let session = Session::in_memory();
        session.store_token("first");
        session.store_token("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn clones_share_the_same_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.store_token("shared");
        assert_eq!(other.token().as_deref(), Some("shared"));
        other.clear();
        assert!(!session.is_authenticated());
    }
}
