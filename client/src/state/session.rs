//! Persisted session: bearer token plus the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and user live under two independent storage keys so a reload
//! can restore them. Only the token decides authentication; a stored user
//! without a token is ignored by route guards.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthUser;
use crate::util::storage::KeyValueStore;

/// Raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// JSON-serialized [`AuthUser`].
pub const USER_KEY: &str = "user";

/// Snapshot of both persisted session keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<AuthUser>,
}

impl Session {
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        Self { token: load_token(store), user: load_user(store) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Persisted token; an empty string counts as absent.
pub fn load_token<S: KeyValueStore>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Persisted user; unreadable JSON counts as absent.
pub fn load_user<S: KeyValueStore>(store: &S) -> Option<AuthUser> {
    store.load_json(USER_KEY)
}

pub fn has_token<S: KeyValueStore>(store: &S) -> bool {
    load_token(store).is_some()
}

pub fn save_token<S: KeyValueStore>(store: &S, token: &str) {
    store.set(TOKEN_KEY, token);
}

pub fn save_user<S: KeyValueStore>(store: &S, user: &AuthUser) {
    store.save_json(USER_KEY, user);
}

/// Remove both keys. Safe to call when already signed out.
pub fn clear<S: KeyValueStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
