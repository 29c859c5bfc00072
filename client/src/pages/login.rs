//! Login page for email + password sign-in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::test_credentials::TestCredentials;
use crate::net::api::HttpApi;
use crate::state::auth::{self, AuthState};
use crate::util::guard::{self, RouteAccess};
use crate::util::storage::LocalStorage;
use crate::util::task::spawn_browser;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub(crate) const CREDENTIALS_REQUIRED: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is kept verbatim.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Guest-only login form. A successful login stores the session; the guard
/// then moves the visitor to `/`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    guard::install_route_guard(RouteAccess::GuestOnly, auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<&'static str>);

    auth.update(|s| s.error = None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(message) => {
                info.set(Some(message));
                return;
            }
        };
        info.set(None);
        spawn_browser(async move {
            auth::login(&HttpApi::browser(), &LocalStorage, auth, &email_value, &password_value).await;
        });
    };

    view! {
        <Show when=move || guard::may_render(RouteAccess::GuestOnly, &auth.get())>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Userdesk"</h1>
                    <p class="login-card__subtitle">"Sign in to your account"</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || auth.get().loading>
                            {move || if auth.get().loading { "Signing in…" } else { "Sign in" }}
                        </button>
                    </form>
                    <Show when=move || info.get().is_some()>
                        <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || auth.get().error.is_some()>
                        <p class="login-message login-message--error">
                            {move || auth.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <p class="login-card__footer">
                        "No account? " <A href="/register">"Register"</A>
                    </p>
                    <TestCredentials/>
                </div>
            </div>
        </Show>
    }
}
