//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpApi;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::auth::{self, AuthState, FALLBACK_USER_ID};
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::state::users::UsersState;
use crate::util::dark_mode;
use crate::util::storage::LocalStorage;
use crate::util::task::spawn_browser;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The inline theme script runs before first paint so a stored dark
/// preference never flashes the light theme.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=dark_mode::BOOT_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the persisted session and
/// theme once running in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let users = RwSignal::new(UsersState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(users);
    provide_context(ui);

    // Effects only run after hydration, so the server render and the first
    // client render agree on a not-yet-ready auth state.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.set(UiState::with_dark_mode(dark));
        auth.set(AuthState::from_session(Session::load(&LocalStorage)));
    });

    Effect::new(move || {
        if !auth.with(AuthState::needs_current_user) {
            return;
        }
        spawn_browser(async move {
            auth::fetch_current_user(&HttpApi::browser(), &LocalStorage, auth, FALLBACK_USER_ID).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/userdesk.css"/>
        <Title text="Userdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
