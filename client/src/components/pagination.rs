//! Previous/next controls for the user listing.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::users::{self, UsersState};
use crate::util::task::spawn_browser;

#[component]
pub fn Pagination() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let on_previous = move |_| {
        spawn_browser(async move {
            users::previous_page(&HttpApi::browser(), users).await;
        });
    };
    let on_next = move |_| {
        spawn_browser(async move {
            users::next_page(&HttpApi::browser(), users).await;
        });
    };

    view! {
        <div class="pagination">
            <button
                class="btn pagination__prev"
                on:click=on_previous
                disabled=move || { let s = users.get(); s.loading || !s.has_previous() }
            >
                "Previous"
            </button>
            <span class="pagination__status">
                {move || {
                    let s = users.get();
                    format!("Page {} of {}", s.current_page, s.total_pages)
                }}
            </span>
            <button
                class="btn pagination__next"
                on:click=on_next
                disabled=move || { let s = users.get(); s.loading || !s.has_next() }
            >
                "Next"
            </button>
        </div>
    }
}
