//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and toggles a `dark` class
//! on the `<html>` element. Toggle writes back to `localStorage` and updates
//! that class. Requires a browser environment.
//!
//! BOOT ORDER
//! ==========
//! [`BOOT_SCRIPT`] runs inline in the SSR shell before first paint and applies
//! the same rule as [`resolve_preference`], so the page never flashes the
//! wrong theme while the WASM bundle loads.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Storage key holding `"true"` or `"false"`.
pub const STORAGE_KEY: &str = "darkMode";

/// Class toggled on the document element.
pub const DARK_CLASS: &str = "dark";

/// Inline script for the document head. Mirrors [`resolve_preference`].
pub const BOOT_SCRIPT: &str = "(function(){try{var s=localStorage.getItem('darkMode');\
var d=s===null?window.matchMedia('(prefers-color-scheme: dark)').matches:s==='true';\
if(d){document.documentElement.classList.add('dark');}}catch(e){}})();";

/// Decide the initial theme. A stored value always wins over the OS setting.
pub fn resolve_preference(stored: Option<&str>, os_prefers_dark: bool) -> bool {
    match stored {
        Some(value) => value == "true",
        None => os_prefers_dark,
    }
}

/// Serialized form written under [`STORAGE_KEY`].
pub fn stored_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::storage::{KeyValueStore, LocalStorage};

        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = LocalStorage.get(STORAGE_KEY);
        let os_prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        resolve_preference(stored.as_deref(), os_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = el.class_list();
            let _ = if enabled { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        use crate::util::storage::{KeyValueStore, LocalStorage};
        LocalStorage.set(STORAGE_KEY, stored_value(next));
    }
    next
}
