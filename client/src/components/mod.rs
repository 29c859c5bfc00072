//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin chrome and user management surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod delete_modal;
pub mod pagination;
pub mod search_bar;
pub mod sidebar;
pub mod test_credentials;
pub mod user_modal;
pub mod user_table;
