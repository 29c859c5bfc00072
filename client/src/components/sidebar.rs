//! Navigation sidebar with theme toggle and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{self, AuthState};
use crate::state::ui::UiState;
use crate::state::users::UsersState;
use crate::util::storage::LocalStorage;

/// Sidebar shown on every authenticated page.
///
/// Signing out only clears local state; the protected-route guard of the
/// current page performs the redirect to `/login`.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let users = expect_context::<RwSignal<UsersState>>();

    let on_logout = move |_| {
        auth::logout(&LocalStorage, auth);
        users.set(UsersState::default());
        ui.update(UiState::close_sidebar);
    };

    let avatar = move || auth.get().user.map(|u| u.avatar).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <aside class="sidebar" class=("sidebar--open", move || ui.get().sidebar_open)>
            <div class="sidebar__brand">"Userdesk"</div>
            <nav class="sidebar__nav" on:click=move |_| ui.update(UiState::close_sidebar)>
                <A href="/">"Users"</A>
                <A href="/profile">"Profile"</A>
            </nav>

            <div class="sidebar__spacer"></div>

            <button
                class="btn sidebar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀ Light mode" } else { "☾ Dark mode" }}
            </button>

            <div class="sidebar__self">
                <Show when=move || !avatar().is_empty()>
                    <img class="sidebar__avatar" src=avatar alt=""/>
                </Show>
                <div class="sidebar__identity">
                    <span class="sidebar__name">{move || auth.get().display_name()}</span>
                    <span class="sidebar__email">{email}</span>
                </div>
            </div>

            <button class="btn sidebar__logout" on:click=on_logout title="Sign out">
                "Sign out"
            </button>
        </aside>
    }
}
