//! Add/edit dialog for a single user.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::users::{self, Modal, UsersState};
use crate::util::task::spawn_browser;

/// Rendered while the add or edit modal is open. The draft lives in
/// `UsersState::form` so closing the dialog discards it.
#[component]
pub fn UserModal() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let is_open = move || matches!(users.get().modal, Modal::Add | Modal::Edit(_));
    let title = move || match users.get().modal {
        Modal::Edit(_) => "Edit user",
        _ => "Add user",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let modal = users.with_untracked(|s| s.modal);
        spawn_browser(async move {
            let api = HttpApi::browser();
            match modal {
                Modal::Add => {
                    users::create_user(&api, users).await;
                }
                Modal::Edit(id) => {
                    users::update_user(&api, users, id).await;
                }
                Modal::None | Modal::Delete(_) => {}
            }
        });
    };

    view! {
        <Show when=is_open>
            <div class="dialog-backdrop" on:click=move |_| users.update(UsersState::close_modal)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <span>{title}</span>
                        <button class="btn dialog__close" on:click=move |_| users.update(UsersState::close_modal)>
                            "✕"
                        </button>
                    </div>
                    <form class="dialog__body" on:submit=on_submit>
                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || users.get().form.name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    users.update(|s| s.form.name = value);
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Job"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || users.get().form.job
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    users.update(|s| s.form.job = value);
                                }
                            />
                        </label>
                        <Show when=move || users.get().error.is_some()>
                            <div class="dialog__error">{move || users.get().error.unwrap_or_default()}</div>
                        </Show>
                        <div class="dialog__footer">
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| users.update(UsersState::close_modal)
                                disabled=move || users.get().loading
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || users.get().loading>
                                {move || if users.get().loading { "Saving…" } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
