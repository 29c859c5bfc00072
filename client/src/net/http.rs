//! HTTP client wrapper for the remote API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the transport answers
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! SESSION HANDLING
//! ================
//! Every request carries the persisted bearer token when one exists. A 401
//! from any endpoint clears the persisted session and forces navigation to
//! the login view before the error reaches the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::state::session;
use crate::util::nav;
use crate::util::storage::KeyValueStore;

/// Public demo API used when no build-time override is set.
pub const DEFAULT_API_URL: &str = "https://reqres.in/api";

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Remote endpoint settings, fixed at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Normalize a base URL (no trailing slash) and drop a blank key.
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            api_key: api_key.map(str::trim).filter(|k| !k.is_empty()).map(str::to_owned),
        }
    }

    /// Read `USERDESK_API_URL` and `USERDESK_API_KEY` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("USERDESK_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("USERDESK_API_KEY"),
        )
    }

    /// Absolute URL for an API path such as `users/2`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Request verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Runs with the login path after a 401 tore the session down.
pub type UnauthorizedHook = fn(&str);

/// Moves one request over the wire and hands back status and body text.
pub trait Transport {
    fn dispatch(
        &self,
        method: Method,
        url: &str,
        headers: &[(&'static str, String)],
        payload: Option<String>,
    ) -> impl Future<Output = Result<(u16, String), ApiError>>;
}

/// `gloo-net` in the browser; [`ApiError::Unavailable`] everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[cfg(feature = "hydrate")]
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        headers: &[(&'static str, String)],
        payload: Option<String>,
    ) -> Result<(u16, String), ApiError> {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = match payload {
            Some(json) => builder.body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, text))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        headers: &[(&'static str, String)],
        payload: Option<String>,
    ) -> Result<(u16, String), ApiError> {
        let _ = (method, url, headers, payload);
        Err(ApiError::Unavailable)
    }
}

/// Configured transport bound to a session store.
#[derive(Clone, Debug)]
pub struct HttpClient<S, T = BrowserTransport> {
    config: ApiConfig,
    store: S,
    transport: T,
    on_unauthorized: UnauthorizedHook,
}

impl<S: KeyValueStore> HttpClient<S> {
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self::with_transport(config, store, BrowserTransport)
    }
}

impl<S: KeyValueStore, T: Transport> HttpClient<S, T> {
    /// Client over a custom transport. A 401 still redirects through
    /// [`nav::hard_redirect`] unless [`Self::on_unauthorized`] replaces it.
    pub fn with_transport(config: ApiConfig, store: S, transport: T) -> Self {
        Self { config, store, transport, on_unauthorized: nav::hard_redirect }
    }

    #[must_use]
    pub fn on_unauthorized(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = hook;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Headers attached to every outgoing request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = session::load_token(&self.store) {
            headers.push(("Authorization", bearer(&token)));
        }
        if let Some(key) = &self.config.api_key {
            headers.push((API_KEY_HEADER, key.clone()));
        }
        headers
    }

    /// Map a response status to success or an [`ApiError`], tearing the
    /// session down on 401.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for 401 and [`ApiError::Rejected`]
    /// for any other non-2xx status.
    pub fn check_status(&self, status: u16, body: &str) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        let err = ApiError::from_response(status, body);
        if err == ApiError::Unauthorized {
            leptos::logging::warn!("server rejected the session token; signing out");
            session::clear(&self.store);
            (self.on_unauthorized)(nav::LOGIN_PATH);
        }
        Err(err)
    }

    /// Send a request and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decode failures as [`ApiError`].
    pub async fn send_json<R, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize,
    {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request whose response body is ignored (e.g. `204 No Content`).
    ///
    /// # Errors
    ///
    /// Returns transport or status failures as [`ApiError`].
    pub async fn send_empty<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<String, ApiError> {
        let payload = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let url = self.config.endpoint(path);
        let (status, text) = self.transport.dispatch(method, &url, &self.headers(), payload).await?;
        self.check_status(status, &text)?;
        Ok(text)
    }
}
