//! User list state: loaded page, pagination, search, and modal drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<UsersState>` context and driven by the home page.
//! The remote API is the only source of truth: every successful mutation is
//! followed by a re-fetch of the current page instead of a local patch,
//! because the demo backend does not durably persist writes.
//!
//! SEARCH
//! ======
//! `query` echoes the input box on every keystroke. `debounced_query` only
//! changes once typing settles (see [`crate::util::debounce`]) and is what
//! [`UsersState::filtered`] uses. Filtering covers the loaded page only.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::net::api::{PAGE_SIZE, UserApi};
use crate::net::types::{User, UserForm, UserPage};
use crate::util::debounce::{Debounce, SEARCH_DEBOUNCE_MS, Ticket};

pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user details";
pub const CREATE_FAILED: &str = "Failed to create user";
pub const UPDATE_FAILED: &str = "Failed to update user";
pub const DELETE_FAILED: &str = "Failed to delete user";
pub const NAME_REQUIRED: &str = "Name is required";

/// Which dialog is open. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Add,
    Edit(u32),
    Delete(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<User>,
    pub current_page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub debounced_query: String,
    /// Raw query differs from the applied one; a settle is pending.
    pub searching: bool,
    pub modal: Modal,
    pub form: UserForm,
    pub selected: Option<User>,
    search: Debounce<String>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            current_page: 1,
            total_pages: 1,
            loading: false,
            error: None,
            query: String::new(),
            debounced_query: String::new(),
            searching: false,
            modal: Modal::None,
            form: UserForm::default(),
            selected: None,
            search: Debounce::new(SEARCH_DEBOUNCE_MS),
        }
    }
}

impl UsersState {
    /// Loaded users matching the settled query.
    pub fn filtered(&self) -> Vec<User> {
        filter_users(&self.users, &self.debounced_query)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_target(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    pub fn previous_target(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    /// Replace the list and cursor with a server page.
    pub fn apply_page(&mut self, page: UserPage) {
        self.users = page.data;
        self.current_page = page.page;
        self.total_pages = page.total_pages;
    }

    /// Echo a keystroke and restart the settle timer. The returned ticket is
    /// handed back to [`Self::settle_query`] once the quiet period elapses.
    pub fn type_query(&mut self, query: String) -> Ticket {
        self.searching = query != self.debounced_query;
        self.query = query.clone();
        self.search.schedule(query)
    }

    /// Apply the pending query if `ticket` is still the latest. Returns
    /// whether the filter value changed hands.
    pub fn settle_query(&mut self, ticket: Ticket) -> bool {
        match self.search.fire(ticket) {
            Some(query) => {
                self.debounced_query = query;
                self.searching = false;
                true
            }
            None => false,
        }
    }

    /// Abandon a pending settle (component teardown).
    pub fn cancel_search(&mut self) {
        self.search.cancel();
        self.searching = false;
    }

    pub fn search_delay_ms(&self) -> u32 {
        self.search.delay_ms()
    }

    pub fn open_add(&mut self) {
        self.modal = Modal::Add;
        self.form = UserForm::default();
        self.selected = None;
        self.error = None;
    }

    pub fn open_edit(&mut self, user: &User) {
        self.modal = Modal::Edit(user.id);
        self.form = UserForm { name: user.full_name(), job: user.job.clone().unwrap_or_default() };
        self.selected = Some(user.clone());
        self.error = None;
    }

    pub fn open_delete(&mut self, user: &User) {
        self.modal = Modal::Delete(user.id);
        self.form = UserForm::default();
        self.selected = Some(user.clone());
        self.error = None;
    }

    /// Close the dialog only if `modal` is still the one showing.
    pub fn close_modal_if(&mut self, modal: Modal) {
        if self.modal == modal {
            self.close_modal();
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
        self.form = UserForm::default();
        self.selected = None;
    }

    fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Reactive view of the filtered page.
///
/// Recomputes only when the loaded list or the settled query changes, so
/// keystrokes that only touch `query` never re-run the filter.
pub fn filtered_memo(users: RwSignal<UsersState>) -> Memo<Vec<User>> {
    filtered_memo_with(users, filter_users)
}

pub(crate) fn filtered_memo_with<F>(users: RwSignal<UsersState>, filter: F) -> Memo<Vec<User>>
where
    F: Fn(&[User], &str) -> Vec<User> + Send + Sync + 'static,
{
    let loaded = Memo::new(move |_| users.with(|s| s.users.clone()));
    let settled = Memo::new(move |_| users.with(|s| s.debounced_query.clone()));
    Memo::new(move |_| loaded.with(|list| settled.with(|query| filter(list, query))))
}

/// Case-insensitive substring filter over first name, last name and email.
/// A blank query returns every user.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }
    users.iter().filter(|u| u.matches(&needle)).cloned().collect()
}

/// Check a draft before submitting it.
///
/// # Errors
///
/// Returns a display message when the name is blank.
pub fn validate_form(form: &UserForm) -> Result<UserForm, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    Ok(UserForm { name: name.to_owned(), job: form.job.trim().to_owned() })
}

/// Load page `page`. Keeps the previous list on failure.
pub async fn fetch_page<A: UserApi>(api: &A, users: RwSignal<UsersState>, page: u32) -> bool {
    users.update(|s| {
        s.loading = true;
        s.error = None;
    });
    load_page(api, users, page).await
}

async fn load_page<A: UserApi>(api: &A, users: RwSignal<UsersState>, page: u32) -> bool {
    match api.list_users(page, PAGE_SIZE).await {
        Ok(result) => {
            users.update(|s| {
                s.apply_page(result);
                s.loading = false;
            });
            true
        }
        Err(err) => {
            leptos::logging::warn!("fetch users page {page} failed: {err}");
            users.update(|s| s.fail(err.user_message(FETCH_USERS_FAILED)));
            false
        }
    }
}

/// Advance one page. No request at the last page.
pub async fn next_page<A: UserApi>(api: &A, users: RwSignal<UsersState>) -> bool {
    let Some(target) = users.with_untracked(UsersState::next_target) else {
        return false;
    };
    fetch_page(api, users, target).await
}

/// Go back one page. No request at the first page.
pub async fn previous_page<A: UserApi>(api: &A, users: RwSignal<UsersState>) -> bool {
    let Some(target) = users.with_untracked(UsersState::previous_target) else {
        return false;
    };
    fetch_page(api, users, target).await
}

/// Fetch one user for display. Does not touch the loaded list.
pub async fn get_user<A: UserApi>(api: &A, users: RwSignal<UsersState>, id: u32) -> Option<User> {
    users.update(|s| s.error = None);
    match api.get_user(id).await {
        Ok(user) => Some(user),
        Err(err) => {
            leptos::logging::warn!("fetch user {id} failed: {err}");
            users.update(|s| s.error = Some(err.user_message(FETCH_USER_FAILED)));
            None
        }
    }
}

/// Submit the add-user draft, then refresh the current page.
pub async fn create_user<A: UserApi>(api: &A, users: RwSignal<UsersState>) -> bool {
    let Some((form, page, started)) = begin_submit(users) else {
        return false;
    };
    match api.create_user(&form).await {
        Ok(created) => {
            leptos::logging::log!("created user {:?}", created.id);
            refresh_and_close(api, users, page, started).await
        }
        Err(err) => {
            leptos::logging::warn!("create user failed: {err}");
            users.update(|s| s.fail(err.user_message(CREATE_FAILED)));
            false
        }
    }
}

/// Submit the edit draft for user `id`, then refresh the current page.
pub async fn update_user<A: UserApi>(api: &A, users: RwSignal<UsersState>, id: u32) -> bool {
    let Some((form, page, started)) = begin_submit(users) else {
        return false;
    };
    match api.update_user(id, &form).await {
        Ok(_) => refresh_and_close(api, users, page, started).await,
        Err(err) => {
            leptos::logging::warn!("update user {id} failed: {err}");
            users.update(|s| s.fail(err.user_message(UPDATE_FAILED)));
            false
        }
    }
}

/// Delete user `id`, then refresh the current page.
pub async fn delete_user<A: UserApi>(api: &A, users: RwSignal<UsersState>, id: u32) -> bool {
    let Some((page, started)) = users.try_update(|s| s.begin().then_some((s.current_page, s.modal))).flatten() else {
        return false;
    };
    match api.delete_user(id).await {
        Ok(()) => refresh_and_close(api, users, page, started).await,
        Err(err) => {
            leptos::logging::warn!("delete user {id} failed: {err}");
            users.update(|s| s.fail(err.user_message(DELETE_FAILED)));
            false
        }
    }
}

/// Validate the draft and mark the container busy. `None` when invalid or
/// when another request is already in flight.
fn begin_submit(users: RwSignal<UsersState>) -> Option<(UserForm, u32, Modal)> {
    users
        .try_update(|s| {
            let form = match validate_form(&s.form) {
                Ok(form) => form,
                Err(message) => {
                    s.error = Some(message.to_owned());
                    return None;
                }
            };
            s.begin().then(|| (form, s.current_page, s.modal))
        })
        .flatten()
}

/// Re-fetch `page` and only then dismiss the dialog. The mutation already
/// succeeded, so the dialog closes even if the refresh fails. A dialog the
/// user opened in the meantime is left alone.
async fn refresh_and_close<A: UserApi>(api: &A, users: RwSignal<UsersState>, page: u32, started: Modal) -> bool {
    load_page(api, users, page).await;
    users.update(|s| s.close_modal_if(started));
    true
}
