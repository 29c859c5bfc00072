use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::state::session::{TOKEN_KEY, USER_KEY};
use crate::state::test_support::{FakeApi, GOOD_EMAIL, GOOD_PASSWORD, TOKEN, redirects, stub_api, user};
use crate::util::nav::LOGIN_PATH;
use crate::util::storage::MemoryStore;

fn signed_in(store: &MemoryStore) -> RwSignal<AuthState> {
    session::save_token(store, TOKEN);
    session::save_user(store, &synthesize_user(GOOD_EMAIL));
    RwSignal::new(AuthState::from_session(Session::load(store)))
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.ready);
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn needs_current_user_only_with_token_and_no_user() {
    let mut state = AuthState { token: Some("t".to_owned()), ..AuthState::default() };
    assert!(state.needs_current_user());
    state.loading = true;
    assert!(!state.needs_current_user());
    state.loading = false;
    state.error = Some(FETCH_USER_FAILED.to_owned());
    assert!(!state.needs_current_user());
    state.error = None;
    state.user = Some(synthesize_user("a@b.c"));
    assert!(!state.needs_current_user());
    assert!(!AuthState::default().needs_current_user());
}

#[test]
fn synthesized_user_carries_login_email() {
    let u = synthesize_user("someone@example.test");
    assert_eq!(u.id, FALLBACK_USER_ID);
    assert_eq!(u.name, SYNTHESIZED_NAME);
    assert_eq!(u.email, "someone@example.test");
    assert_eq!(u.avatar, DEFAULT_AVATAR);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_valid_credentials_authenticates_and_persists() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());

    assert!(block_on(login(&api, &store, auth, GOOD_EMAIL, GOOD_PASSWORD)));

    let state = auth.get_untracked();
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some(GOOD_EMAIL));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(TOKEN));
    assert_eq!(session::load_user(&store), state.user);
}

#[test]
fn login_with_invalid_credentials_surfaces_server_message() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());

    assert!(!block_on(login(&api, &store, auth, "nobody@example.test", "pw")));

    let state = auth.get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("user not found"));
    assert!(store.is_empty());
}

#[test]
fn login_transport_failure_uses_generic_message() {
    let api = FakeApi::default();
    api.fail_on("login", ApiError::Network("offline".to_owned()));
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());

    assert!(!block_on(login(&api, &store, auth, GOOD_EMAIL, GOOD_PASSWORD)));
    assert_eq!(auth.get_untracked().error.as_deref(), Some(LOGIN_FAILED));
}

#[test]
fn login_clears_previous_error() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState { error: Some("old".to_owned()), ..AuthState::default() });
    assert!(block_on(login(&api, &store, auth, GOOD_EMAIL, GOOD_PASSWORD)));
    assert!(auth.get_untracked().error.is_none());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_success_does_not_authenticate() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());

    assert!(block_on(register(&api, auth, GOOD_EMAIL, "pistol")));

    let state = auth.get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn register_failure_surfaces_server_message() {
    let api = FakeApi::default();
    let auth = RwSignal::new(AuthState::default());
    assert!(!block_on(register(&api, auth, "new@example.test", "pw")));
    assert_eq!(
        auth.get_untracked().error.as_deref(),
        Some("Note: Only defined users succeed registration")
    );
}

#[test]
fn register_without_server_message_uses_fallback() {
    let api = FakeApi::default();
    api.fail_on("register", ApiError::Rejected { status: 500, message: None });
    let auth = RwSignal::new(AuthState::default());
    assert!(!block_on(register(&api, auth, GOOD_EMAIL, "pw")));
    assert_eq!(auth.get_untracked().error.as_deref(), Some(REGISTER_FAILED));
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_current_user_maps_and_persists() {
    let api = FakeApi::with_users(vec![user(1, "George", "Bluth", "george.bluth@reqres.in")]);
    let store = MemoryStore::new();
    session::save_token(&store, TOKEN);
    let auth = RwSignal::new(AuthState::from_session(Session::load(&store)));
    assert!(auth.get_untracked().needs_current_user());

    assert!(block_on(fetch_current_user(&api, &store, auth, FALLBACK_USER_ID)));

    let state = auth.get_untracked();
    let cached = state.user.clone().expect("user");
    assert_eq!(cached.name, "George Bluth");
    assert_eq!(cached.email, "george.bluth@reqres.in");
    assert_eq!(session::load_user(&store), Some(cached));
    assert!(!state.needs_current_user());
}

#[test]
fn fetch_current_user_is_idempotent() {
    let api = FakeApi::with_users(vec![user(1, "George", "Bluth", "george.bluth@reqres.in")]);
    let store = MemoryStore::new();
    session::save_token(&store, TOKEN);
    let auth = RwSignal::new(AuthState::from_session(Session::load(&store)));

    assert!(block_on(fetch_current_user(&api, &store, auth, 1)));
    let first = auth.get_untracked();
    assert!(block_on(fetch_current_user(&api, &store, auth, 1)));
    assert_eq!(auth.get_untracked(), first);
    assert_eq!(api.count("get:"), 2);
}

#[test]
fn fetch_current_user_failure_sets_error() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    session::save_token(&store, TOKEN);
    let auth = RwSignal::new(AuthState::from_session(Session::load(&store)));

    assert!(!block_on(fetch_current_user(&api, &store, auth, 99)));
    let state = auth.get_untracked();
    assert_eq!(state.error.as_deref(), Some(FETCH_USER_FAILED));
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn unauthorized_profile_update_tears_session_down() {
    let api = stub_api(MemoryStore::new(), 401, "{}");
    let store = api.http().store().clone();
    let auth = signed_in(&store);

    assert!(!block_on(update_profile(&api, &store, auth, "Eve Holt", GOOD_EMAIL)));

    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert_eq!(redirects(), vec![LOGIN_PATH.to_owned()]);
    assert!(!auth.get_untracked().loading);
}

#[test]
fn fetch_current_user_after_logout_is_discarded() {
    let api = FakeApi::with_users(vec![user(1, "George", "Bluth", "george.bluth@reqres.in")]);
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());

    assert!(!block_on(fetch_current_user(&api, &store, auth, 1)));
    assert!(store.get(USER_KEY).is_none());
    assert!(auth.get_untracked().user.is_none());
}

// =============================================================
// update_profile
// =============================================================

#[test]
fn update_profile_writes_through_to_storage() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let auth = signed_in(&store);

    assert!(block_on(update_profile(&api, &store, auth, "Eve Holt", "eve@example.test")));

    let cached = auth.get_untracked().user.expect("user");
    assert_eq!(cached.name, "Eve Holt");
    assert_eq!(cached.email, "eve@example.test");
    assert_eq!(cached.id, FALLBACK_USER_ID);
    assert_eq!(session::load_user(&store), Some(cached));
    assert_eq!(api.calls(), vec![format!("profile:{FALLBACK_USER_ID}")]);
}

#[test]
fn update_profile_failure_keeps_previous_user() {
    let api = FakeApi::default();
    api.fail_on("profile", ApiError::Network("offline".to_owned()));
    let store = MemoryStore::new();
    let auth = signed_in(&store);
    let before = auth.get_untracked().user;

    assert!(!block_on(update_profile(&api, &store, auth, "X", "x@example.test")));

    let state = auth.get_untracked();
    assert_eq!(state.user, before);
    assert_eq!(state.error.as_deref(), Some(PROFILE_UPDATE_FAILED));
    assert_eq!(session::load_user(&store), before);
}

#[test]
fn update_profile_without_user_is_refused() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());
    assert!(!block_on(update_profile(&api, &store, auth, "X", "x@example.test")));
    assert_eq!(auth.get_untracked().error.as_deref(), Some(NOT_SIGNED_IN));
    assert!(api.calls().is_empty());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_storage_and_state() {
    let store = MemoryStore::new();
    let auth = signed_in(&store);
    logout(&store, auth);
    assert!(auth.get_untracked().ready);
    assert!(!auth.get_untracked().is_authenticated());
    assert!(auth.get_untracked().user.is_none());
    assert!(store.is_empty());
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryStore::new();
    let auth = RwSignal::new(AuthState::default());
    logout(&store, auth);
    logout(&store, auth);
    let state = auth.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
}
