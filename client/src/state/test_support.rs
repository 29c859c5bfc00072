//! In-memory [`UserApi`] for state action tests.

use std::cell::RefCell;

use crate::net::api::{HttpApi, UserApi};
use crate::net::error::ApiError;
use crate::net::http::{ApiConfig, HttpClient, Method, Transport};
use crate::net::types::{AuthUser, Credentials, ProfileUpdate, TokenResponse, User, UserForm, UserMutation, UserPage};
use crate::state::session;
use crate::util::storage::MemoryStore;

pub const GOOD_EMAIL: &str = "eve.holt@reqres.in";
pub const GOOD_PASSWORD: &str = "cityslicka";
pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";

pub fn user(id: u32, first: &str, last: &str, email: &str) -> User {
    User {
        id,
        email: email.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        avatar: format!("https://example.test/{id}.jpg"),
        job: None,
    }
}

/// `count` users with ids `1..=count`.
pub fn roster(count: u32) -> Vec<User> {
    (1..=count)
        .map(|id| user(id, &format!("First{id}"), &format!("Last{id}"), &format!("user{id}@example.test")))
        .collect()
}

/// Store holding a token and the synthesized login user.
pub fn signed_in_store() -> MemoryStore {
    let store = MemoryStore::new();
    session::save_token(&store, TOKEN);
    session::save_user(
        &store,
        &AuthUser { id: 1, name: "Test User".to_owned(), email: GOOD_EMAIL.to_owned(), avatar: String::new() },
    );
    store
}

thread_local! {
    static REDIRECTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Unauthorized hook that records the target instead of leaving the page.
pub fn record_redirect(path: &str) {
    REDIRECTS.with(|r| r.borrow_mut().push(path.to_owned()));
}

/// Redirects recorded on this test's thread.
pub fn redirects() -> Vec<String> {
    REDIRECTS.with(|r| r.borrow().clone())
}

/// Transport answering every request with one canned response.
pub struct StubTransport {
    pub status: u16,
    pub body: &'static str,
    pub seen: RefCell<Vec<(Method, String)>>,
}

impl StubTransport {
    pub fn new(status: u16, body: &'static str) -> Self {
        Self { status, body, seen: RefCell::new(Vec::new()) }
    }
}

impl Transport for StubTransport {
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        _headers: &[(&'static str, String)],
        _payload: Option<String>,
    ) -> Result<(u16, String), ApiError> {
        self.seen.borrow_mut().push((method, url.to_owned()));
        Ok((self.status, self.body.to_owned()))
    }
}

/// Real HTTP client over `store` whose every request is answered `status`.
pub fn stub_api(store: MemoryStore, status: u16, body: &'static str) -> HttpApi<MemoryStore, StubTransport> {
    let client = HttpClient::with_transport(ApiConfig::new("https://api.example.test", None), store, StubTransport::new(status, body))
        .on_unauthorized(record_redirect);
    HttpApi::from_client(client)
}

/// Fake backend that, unlike the demo API, really persists writes.
#[derive(Default)]
pub struct FakeApi {
    pub users: RefCell<Vec<User>>,
    pub calls: RefCell<Vec<String>>,
    /// Operation name (`"list"`, `"delete"`, ...) that fails, and how.
    pub failing: RefCell<Option<(&'static str, ApiError)>>,
    /// Runs on every call with the operation name, before it resolves.
    pub hook: RefCell<Option<Box<dyn Fn(&str)>>>,
}

impl FakeApi {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users: RefCell::new(users), ..Self::default() }
    }

    pub fn fail_on(&self, op: &'static str, err: ApiError) {
        *self.failing.borrow_mut() = Some((op, err));
    }

    pub fn on_call(&self, hook: impl Fn(&str) + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, op: &'static str, detail: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("{op}:{detail}"));
        if let Some(hook) = &*self.hook.borrow() {
            hook(op);
        }
        match &*self.failing.borrow() {
            Some((failing, err)) if *failing == op => Err(err.clone()),
            _ => Ok(()),
        }
    }

    fn rejected(status: u16, message: &str) -> ApiError {
        ApiError::Rejected { status, message: Some(message.to_owned()) }
    }
}

impl UserApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record("login", credentials.email.clone())?;
        if credentials.password.is_empty() {
            return Err(Self::rejected(400, "Missing password"));
        }
        if credentials.email != GOOD_EMAIL || credentials.password != GOOD_PASSWORD {
            return Err(Self::rejected(400, "user not found"));
        }
        Ok(TokenResponse { token: TOKEN.to_owned() })
    }

    async fn register(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record("register", credentials.email.clone())?;
        if credentials.email != GOOD_EMAIL {
            return Err(Self::rejected(400, "Note: Only defined users succeed registration"));
        }
        Ok(TokenResponse { token: TOKEN.to_owned() })
    }

    async fn list_users(&self, page: u32, per_page: u32) -> Result<UserPage, ApiError> {
        self.record("list", page.to_string())?;
        let users = self.users.borrow();
        let total = u32::try_from(users.len()).unwrap_or(u32::MAX);
        let total_pages = total.div_ceil(per_page).max(1);
        let start = ((page.saturating_sub(1)) * per_page) as usize;
        let data = users.iter().skip(start).take(per_page as usize).cloned().collect();
        Ok(UserPage { data, page, per_page, total, total_pages })
    }

    async fn get_user(&self, id: u32) -> Result<User, ApiError> {
        self.record("get", id.to_string())?;
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApiError::Rejected { status: 404, message: None })
    }

    async fn create_user(&self, form: &UserForm) -> Result<UserMutation, ApiError> {
        self.record("create", form.name.clone())?;
        let mut users = self.users.borrow_mut();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let (first, last) = form.name.split_once(' ').unwrap_or((form.name.as_str(), ""));
        let mut created = user(id, first, last, &format!("user{id}@example.test"));
        created.job = Some(form.job.clone());
        users.push(created);
        Ok(UserMutation {
            id: Some(id.to_string()),
            name: Some(form.name.clone()),
            job: Some(form.job.clone()),
            ..UserMutation::default()
        })
    }

    async fn update_user(&self, id: u32, form: &UserForm) -> Result<UserMutation, ApiError> {
        self.record("update", id.to_string())?;
        let mut users = self.users.borrow_mut();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            let (first, last) = form.name.split_once(' ').unwrap_or((form.name.as_str(), ""));
            u.first_name = first.to_owned();
            u.last_name = last.to_owned();
            u.job = Some(form.job.clone());
        }
        Ok(UserMutation { name: Some(form.name.clone()), job: Some(form.job.clone()), ..UserMutation::default() })
    }

    async fn update_profile(&self, id: u32, update: &ProfileUpdate) -> Result<UserMutation, ApiError> {
        self.record("profile", id.to_string())?;
        Ok(UserMutation { name: Some(update.name.clone()), ..UserMutation::default() })
    }

    async fn delete_user(&self, id: u32) -> Result<(), ApiError> {
        self.record("delete", id.to_string())?;
        self.users.borrow_mut().retain(|u| u.id != id);
        Ok(())
    }
}
