//! Route guards for protected and guest-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards decide purely from the persisted token: no expiry check and no
//! server round-trip. They control which views are reachable, not what data
//! is readable; the remote API enforces access on its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::nav::{HOME_PATH, LOGIN_PATH};
use super::storage::LocalStorage;
use crate::state::auth::AuthState;
use crate::state::session;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires a token; otherwise sends the visitor to `/login`.
    Protected,
    /// Only without a token (login, register); otherwise sends to `/`.
    GuestOnly,
}

/// Where to send the visitor, or `None` to stay.
pub fn redirect_target(access: RouteAccess, has_token: bool) -> Option<&'static str> {
    match (access, has_token) {
        (RouteAccess::Protected, false) => Some(LOGIN_PATH),
        (RouteAccess::GuestOnly, true) => Some(HOME_PATH),
        _ => None,
    }
}

/// Whether the view behind `access` may render for `state`.
pub fn may_render(access: RouteAccess, state: &AuthState) -> bool {
    state.ready && redirect_target(access, state.is_authenticated()).is_none()
}

/// Redirect away from the current route whenever the persisted token does
/// not satisfy `access`. Re-evaluated on every auth state change.
pub fn install_route_guard<F>(access: RouteAccess, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        auth.track();
        let has_token = session::has_token(&LocalStorage);
        if let Some(target) = redirect_target(access, has_token) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
