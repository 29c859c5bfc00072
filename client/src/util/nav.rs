//! Full-page navigation helpers.
//!
//! Used where a redirect must happen outside the router's reach, such as the
//! HTTP 401 interceptor, which runs inside arbitrary async tasks.

/// Path of the sign-in view.
pub const LOGIN_PATH: &str = "/login";

/// Path of the authenticated landing view.
pub const HOME_PATH: &str = "/";

/// Replace the current page with `path`. No-op outside the browser.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
