//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context at the app root and read by the
//! sidebar, profile page and route guards. Actions below are the only writers.
//!
//! PERSISTENCE
//! ===========
//! Every action that changes the token or user writes storage first and the
//! signal second, so a reload never observes memory and storage disagreeing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{self, Session};
use crate::net::api::UserApi;
use crate::net::types::{AuthUser, Credentials, ProfileUpdate};
use crate::util::storage::KeyValueStore;

/// User id fetched as the stand-in "current user" when none is cached.
pub const FALLBACK_USER_ID: u32 = 1;

/// Display name given to the profile synthesized after login.
pub const SYNTHESIZED_NAME: &str = "Test User";

/// Avatar given to the profile synthesized after login.
pub const DEFAULT_AVATAR: &str = "https://reqres.in/img/faces/1-image.jpg";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user data";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";
pub const NOT_SIGNED_IN: &str = "Not signed in";

/// Authentication state tracking the session, loading status and last error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub error: Option<String>,
    /// The persisted session has been read. Stays `false` during SSR and
    /// hydration so both renders agree.
    pub ready: bool,
}

impl AuthState {
    /// Seed in-memory state from the persisted session at boot.
    pub fn from_session(session: Session) -> Self {
        Self { token: session.token, user: session.user, loading: false, error: None, ready: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// A token exists but no profile is cached, no fetch is running, and the
    /// last attempt did not fail.
    pub fn needs_current_user(&self) -> bool {
        self.token.is_some() && self.user.is_none() && !self.loading && self.error.is_none()
    }

    /// Name shown in navigation chrome.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Guest".to_owned(), |u| u.name.clone())
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Profile stored after login. The login endpoint returns only a token, so
/// the identity is fabricated from the submitted email.
pub fn synthesize_user(email: &str) -> AuthUser {
    AuthUser {
        id: FALLBACK_USER_ID,
        name: SYNTHESIZED_NAME.to_owned(),
        email: email.to_owned(),
        avatar: DEFAULT_AVATAR.to_owned(),
    }
}

/// Sign in and persist the session. Returns whether it succeeded; failures
/// land in `AuthState::error`.
pub async fn login<A, S>(api: &A, store: &S, auth: RwSignal<AuthState>, email: &str, password: &str) -> bool
where
    A: UserApi,
    S: KeyValueStore,
{
    auth.update(AuthState::begin);
    let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
    match api.login(&credentials).await {
        Ok(resp) => {
            let user = synthesize_user(email);
            session::save_token(store, &resp.token);
            session::save_user(store, &user);
            auth.update(|a| {
                a.token = Some(resp.token);
                a.user = Some(user);
                a.loading = false;
            });
            true
        }
        Err(err) => {
            leptos::logging::warn!("login failed: {err}");
            auth.update(|a| a.fail(err.user_message(LOGIN_FAILED)));
            false
        }
    }
}

/// Create an account. Never signs in: the caller sends the user to the login
/// view on success.
pub async fn register<A: UserApi>(api: &A, auth: RwSignal<AuthState>, email: &str, password: &str) -> bool {
    auth.update(AuthState::begin);
    let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
    match api.register(&credentials).await {
        Ok(_) => {
            auth.update(|a| a.loading = false);
            true
        }
        Err(err) => {
            leptos::logging::warn!("registration failed: {err}");
            auth.update(|a| a.fail(err.user_message(REGISTER_FAILED)));
            false
        }
    }
}

/// Fetch user `id` and cache it as the session user.
///
/// Concurrent calls converge: whichever completes last wins. A result that
/// arrives after the session was torn down is discarded.
pub async fn fetch_current_user<A, S>(api: &A, store: &S, auth: RwSignal<AuthState>, id: u32) -> bool
where
    A: UserApi,
    S: KeyValueStore,
{
    auth.update(AuthState::begin);
    match api.get_user(id).await {
        Ok(user) => {
            if !session::has_token(store) {
                auth.update(|a| a.loading = false);
                return false;
            }
            let user = AuthUser::from(user);
            session::save_user(store, &user);
            auth.update(|a| {
                a.user = Some(user);
                a.loading = false;
            });
            true
        }
        Err(err) => {
            leptos::logging::warn!("fetch current user {id} failed: {err}");
            auth.update(|a| a.fail(err.user_message(FETCH_USER_FAILED)));
            false
        }
    }
}

/// Save name and email for the signed-in user through the generic user
/// update endpoint, then write the edited profile through to storage.
pub async fn update_profile<A, S>(api: &A, store: &S, auth: RwSignal<AuthState>, name: &str, email: &str) -> bool
where
    A: UserApi,
    S: KeyValueStore,
{
    let Some(current) = auth.with_untracked(|a| a.user.clone()) else {
        auth.update(|a| a.error = Some(NOT_SIGNED_IN.to_owned()));
        return false;
    };
    auth.update(AuthState::begin);
    let update = ProfileUpdate { name: name.to_owned(), email: email.to_owned() };
    match api.update_profile(current.id, &update).await {
        Ok(_) => {
            let user = AuthUser { name: update.name, email: update.email, ..current };
            session::save_user(store, &user);
            auth.update(|a| {
                a.user = Some(user);
                a.loading = false;
            });
            true
        }
        Err(err) => {
            leptos::logging::warn!("profile update failed: {err}");
            auth.update(|a| a.fail(err.user_message(PROFILE_UPDATE_FAILED)));
            false
        }
    }
}

/// Drop the session locally. No remote call; safe to repeat.
pub fn logout<S: KeyValueStore>(store: &S, auth: RwSignal<AuthState>) {
    session::clear(store);
    auth.set(AuthState { ready: true, ..AuthState::default() });
}
