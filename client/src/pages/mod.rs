//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs its route guard, owns route-scoped orchestration, and
//! delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
