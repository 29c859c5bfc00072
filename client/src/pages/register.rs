//! Registration page. The demo API only accepts pre-seeded addresses.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::login::validate_credentials;
use crate::components::test_credentials::TestCredentials;
use crate::net::api::HttpApi;
use crate::state::auth::{self, AuthState};
use crate::util::guard::{self, RouteAccess};
use crate::util::nav::LOGIN_PATH;
use crate::util::task::spawn_browser;

/// Guest-only registration form. Registration does not sign the visitor in;
/// success continues to `/login`.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard::install_route_guard(RouteAccess::GuestOnly, auth, navigate.clone());

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
        let navigate = navigate.clone();
        spawn_browser(async move {
            if auth::register(&HttpApi::browser(), auth, &email_value, &password_value).await {
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
        });
    };

    view! {
        <Show when=move || guard::may_render(RouteAccess::GuestOnly, &auth.get())>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Userdesk"</h1>
                    <p class="login-card__subtitle">"Create an account"</p>
                    <form class="login-form" on:submit=on_submit.clone()>
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
                            {move || if auth.get().loading { "Registering…" } else { "Register" }}
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
                        "Already registered? " <A href="/login">"Sign in"</A>
                    </p>
                    <TestCredentials/>
                </div>
            </div>
        </Show>
    }
}
