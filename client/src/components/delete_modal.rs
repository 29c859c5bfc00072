//! Delete confirmation dialog.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::users::{self, Modal, UsersState};
use crate::util::task::spawn_browser;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let target_name = move || users.get().selected.map(|u| u.full_name()).unwrap_or_default();

    let on_confirm = move |_| {
        let Modal::Delete(id) = users.with_untracked(|s| s.modal) else {
            return;
        };
        spawn_browser(async move {
            users::delete_user(&HttpApi::browser(), users, id).await;
        });
    };

    view! {
        <Show when=move || matches!(users.get().modal, Modal::Delete(_))>
            <div class="dialog-backdrop" on:click=move |_| users.update(UsersState::close_modal)>
                <div class="dialog dialog--danger" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <span>"Delete user"</span>
                    </div>
                    <div class="dialog__body">
                        <p>"Delete " <strong>{target_name}</strong> "? This cannot be undone."</p>
                        <Show when=move || users.get().error.is_some()>
                            <div class="dialog__error">{move || users.get().error.unwrap_or_default()}</div>
                        </Show>
                    </div>
                    <div class="dialog__footer">
                        <button
                            class="btn"
                            on:click=move |_| users.update(UsersState::close_modal)
                            disabled=move || users.get().loading
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=on_confirm
                            disabled=move || users.get().loading
                        >
                            {move || if users.get().loading { "Deleting…" } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
