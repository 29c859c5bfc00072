//! Typed auth and user endpoints.
//!
//! DESIGN
//! ======
//! State actions are generic over [`UserApi`] so the same code drives the
//! browser transport ([`HttpApi`]) and in-memory fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics or logs.
//! Call sites decide which fallback message to show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::error::ApiError;
use super::http::{ApiConfig, BrowserTransport, HttpClient, Method, Transport};
use super::types::{Credentials, ProfileUpdate, TokenResponse, User, UserEnvelope, UserForm, UserMutation, UserPage};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Fixed page size for the user listing.
pub const PAGE_SIZE: u32 = 6;

/// Remote operations used by the auth and user containers.
pub trait UserApi {
    /// `POST /login`.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    /// `POST /register`.
    fn register(&self, credentials: &Credentials) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    /// `GET /users?page=&per_page=`.
    fn list_users(&self, page: u32, per_page: u32) -> impl Future<Output = Result<UserPage, ApiError>>;

    /// `GET /users/{id}`.
    fn get_user(&self, id: u32) -> impl Future<Output = Result<User, ApiError>>;

    /// `POST /users`.
    fn create_user(&self, form: &UserForm) -> impl Future<Output = Result<UserMutation, ApiError>>;

    /// `PUT /users/{id}` with a `{name, job}` draft.
    fn update_user(&self, id: u32, form: &UserForm) -> impl Future<Output = Result<UserMutation, ApiError>>;

    /// `PUT /users/{id}` with the signed-in user's `{name, email}`.
    fn update_profile(&self, id: u32, update: &ProfileUpdate) -> impl Future<Output = Result<UserMutation, ApiError>>;

    /// `DELETE /users/{id}`.
    fn delete_user(&self, id: u32) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`UserApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi<S, T = BrowserTransport> {
    http: HttpClient<S, T>,
}

impl HttpApi<LocalStorage> {
    /// Browser client: build-time endpoint config and `localStorage` session.
    pub fn browser() -> Self {
        Self::new(ApiConfig::from_build_env(), LocalStorage)
    }
}

impl<S: KeyValueStore> HttpApi<S> {
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self { http: HttpClient::new(config, store) }
    }
}

impl<S: KeyValueStore, T: Transport> HttpApi<S, T> {
    pub fn from_client(http: HttpClient<S, T>) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient<S, T> {
        &self.http
    }
}

fn user_path(id: u32) -> String {
    format!("users/{id}")
}

fn users_page_path(page: u32, per_page: u32) -> String {
    format!("users?page={page}&per_page={per_page}")
}

const NO_BODY: Option<&()> = None;

impl<S: KeyValueStore, T: Transport> UserApi for HttpApi<S, T> {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.http.send_json(Method::Post, "login", Some(credentials)).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.http.send_json(Method::Post, "register", Some(credentials)).await
    }

    async fn list_users(&self, page: u32, per_page: u32) -> Result<UserPage, ApiError> {
        self.http
            .send_json(Method::Get, &users_page_path(page, per_page), NO_BODY)
            .await
    }

    async fn get_user(&self, id: u32) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.http.send_json(Method::Get, &user_path(id), NO_BODY).await?;
        Ok(envelope.data)
    }

    async fn create_user(&self, form: &UserForm) -> Result<UserMutation, ApiError> {
        self.http.send_json(Method::Post, "users", Some(form)).await
    }

    async fn update_user(&self, id: u32, form: &UserForm) -> Result<UserMutation, ApiError> {
        self.http.send_json(Method::Put, &user_path(id), Some(form)).await
    }

    async fn update_profile(&self, id: u32, update: &ProfileUpdate) -> Result<UserMutation, ApiError> {
        self.http.send_json(Method::Put, &user_path(id), Some(update)).await
    }

    async fn delete_user(&self, id: u32) -> Result<(), ApiError> {
        self.http.send_empty(Method::Delete, &user_path(id), NO_BODY).await
    }
}
