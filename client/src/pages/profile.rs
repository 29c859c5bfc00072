//! Profile page for the signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::net::api::HttpApi;
use crate::state::auth::{self, AuthState};
use crate::state::ui::UiState;
use crate::util::guard::{self, RouteAccess};
use crate::util::storage::LocalStorage;
use crate::util::task::spawn_browser;

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

pub(crate) const PROFILE_FIELDS_REQUIRED: &str = "Name and email are required.";
pub(crate) const EMAIL_INVALID: &str = "Enter a valid email address.";
pub(crate) const PROFILE_SAVED: &str = "Profile updated successfully!";

/// Trim both fields, require them, and reject an email without `@`.
pub(crate) fn validate_profile(name: &str, email: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(PROFILE_FIELDS_REQUIRED);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(EMAIL_INVALID),
    }
    Ok((name.to_owned(), email.to_owned()))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    guard::install_route_guard(RouteAccess::Protected, auth, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(None::<&'static str>);

    // Seed the form whenever the session user changes (boot fetch, save).
    Effect::new(move || {
        if let Some(user) = auth.with(|s| s.user.clone()) {
            name.set(user.name);
            email.set(user.email);
        }
    });

    auth.update(|s| s.error = None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let (name_value, email_value) = match validate_profile(&name.get_untracked(), &email.get_untracked()) {
            Ok(pair) => pair,
            Err(message) => {
                info.set(Some(message));
                return;
            }
        };
        info.set(None);
        spawn_browser(async move {
            if auth::update_profile(&HttpApi::browser(), &LocalStorage, auth, &name_value, &email_value).await {
                info.set(Some(PROFILE_SAVED));
            }
        });
    };

    let avatar = move || auth.get().user.map(|u| u.avatar).unwrap_or_default();

    view! {
        <Show when=move || guard::may_render(RouteAccess::Protected, &auth.get())>
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <header class="page-header">
                        <button class="btn page-header__menu" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                            "☰"
                        </button>
                        <h1>"Profile"</h1>
                    </header>
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=move || view! { <p class="profile__loading">"Loading profile…"</p> }
                    >
                        <form class="profile-form" on:submit=on_submit>
                            <img class="profile-form__avatar" src=avatar alt=""/>
                            <label class="dialog__label">
                                "Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Email"
                                <input
                                    class="dialog__input"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || auth.get().loading>
                                {move || if auth.get().loading { "Saving…" } else { "Save changes" }}
                            </button>
                        </form>
                    </Show>
                    <Show when=move || info.get().is_some()>
                        <p class="profile__message">{move || info.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || auth.get().error.is_some()>
                        <p class="profile__message profile__message--error">
                            {move || auth.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                </main>
            </div>
        </Show>
    }
}
