//! Networking modules for the remote user directory API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport concerns (base URL, bearer token, 401 teardown),
//! `api` exposes the typed auth and user endpoints, `types` defines the wire
//! schema, and `error` the failure taxonomy shared by every call site.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
