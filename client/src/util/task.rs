//! Browser task spawning.

use std::future::Future;

/// Run `fut` on the browser event loop. Outside the browser the future is
/// dropped unpolled: event handlers and effects never fire during SSR.
pub fn spawn_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fut);
    }
}
