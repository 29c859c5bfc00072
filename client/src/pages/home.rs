//! Users page: search, paginated table and the add/edit/delete dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the current page once
//! the guard admits the visitor; every later fetch is driven by pagination
//! or by a successful mutation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::delete_modal::DeleteModal;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::sidebar::Sidebar;
use crate::components::user_modal::UserModal;
use crate::components::user_table::UserTable;
use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::state::users::{self, UsersState};
use crate::util::guard::{self, RouteAccess};
use crate::util::task::spawn_browser;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    guard::install_route_guard(RouteAccess::Protected, auth, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !guard::may_render(RouteAccess::Protected, &auth.get()) {
            return;
        }
        requested.set(true);
        let page = users.with_untracked(|s| s.current_page);
        spawn_browser(async move {
            users::fetch_page(&HttpApi::browser(), users, page).await;
        });
    });

    view! {
        <Show when=move || guard::may_render(RouteAccess::Protected, &auth.get())>
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <header class="page-header">
                        <button class="btn page-header__menu" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                            "☰"
                        </button>
                        <h1>"Users"</h1>
                        <button class="btn btn--primary" on:click=move |_| users.update(UsersState::open_add)>
                            "Add user"
                        </button>
                    </header>
                    <SearchBar/>
                    <UserTable/>
                    <Pagination/>
                </main>
                <UserModal/>
                <DeleteModal/>
            </div>
        </Show>
    }
}
