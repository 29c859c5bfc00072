//! Debounced search box for the loaded user page.

use leptos::prelude::*;

use crate::state::users::UsersState;
use crate::util::debounce::sleep_ms;
use crate::util::task::spawn_browser;

/// Search input. Echoes every keystroke and applies the filter once typing
/// settles; unmounting abandons a pending settle.
#[component]
pub fn SearchBar() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        let Some(ticket) = users.try_update(|s| s.type_query(value)) else {
            return;
        };
        let delay = users.with_untracked(UsersState::search_delay_ms);
        spawn_browser(async move {
            sleep_ms(delay).await;
            users.maybe_update(|s| s.settle_query(ticket));
        });
    };

    on_cleanup(move || {
        let _ = users.try_update(UsersState::cancel_search);
    });

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search by name or email"
                prop:value=move || users.get().query
                on:input=on_input
            />
            <Show when=move || users.get().searching>
                <span class="search-bar__hint">"Searching…"</span>
            </Show>
        </div>
    }
}
