//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `users`, `ui`) so individual components
//! can depend on small focused models. Each container is a plain struct held
//! in an `RwSignal` context; async actions live next to the struct they write.

pub mod auth;
pub mod session;
pub mod ui;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
