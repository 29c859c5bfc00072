//! Table of the loaded user page, filtered by the settled search query.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::users::{self, Modal, UsersState};

#[component]
pub fn UserTable() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let rows = users::filtered_memo(users);
    let empty_label = move || {
        if users.with(|s| s.debounced_query.trim().is_empty()) {
            "No users on this page."
        } else {
            "No users match your search."
        }
    };

    view! {
        <div class="user-table">
            <Show when=move || users.get().loading>
                <div class="user-table__loading">"Loading users…"</div>
            </Show>
            <Show when=move || users.with(|s| s.modal == Modal::None && s.error.is_some())>
                <div class="user-table__error">{move || users.get().error.unwrap_or_default()}</div>
            </Show>
            <table>
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Email"</th>
                        <th>"Job"</th>
                        <th class="user-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|u| (u.id, u.full_name(), u.job.clone())
                        children=move |user| view! { <UserRow user=user/> }
                    />
                </tbody>
            </table>
            <Show when=move || !users.get().loading && rows.with(Vec::is_empty)>
                <div class="user-table__empty">{empty_label}</div>
            </Show>
        </div>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let edit_target = user.clone();
    let delete_target = user.clone();
    let name = user.full_name();
    let job = user.job.clone().unwrap_or_else(|| "—".to_owned());

    view! {
        <tr>
            <td class="user-table__identity">
                <img class="user-table__avatar" src=user.avatar.clone() alt=""/>
                <span>{name}</span>
            </td>
            <td>{user.email.clone()}</td>
            <td>{job}</td>
            <td class="user-table__actions">
                <button class="btn btn--small" on:click=move |_| users.update(|s| s.open_edit(&edit_target))>
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| users.update(|s| s.open_delete(&delete_target))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
