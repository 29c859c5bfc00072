//! Trailing-edge debounce with ticket-based cancellation.
//!
//! DESIGN
//! ======
//! Every [`Debounce::schedule`] call issues a new ticket and invalidates all
//! earlier ones. The timer that was started for a ticket hands it back to
//! [`Debounce::fire`] when it elapses; only the most recent, uncancelled
//! ticket yields the settled value. Timers that outlive their ticket resolve
//! into a no-op, so the caller never needs a handle to abort them.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Quiet period for the user search box.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Opaque identifier of one scheduled settle.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounce<T> {
    delay_ms: u32,
    ticket: Ticket,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, ticket: 0, pending: None }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replace any pending value with `value` and return the ticket its timer
    /// must present to [`Self::fire`].
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.ticket = self.ticket.wrapping_add(1);
        self.pending = Some(value);
        self.ticket
    }

    /// Release the pending value if `ticket` is still current.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket != self.ticket {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value and invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.ticket = self.ticket.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Wait out the quiet period in the browser. Resolves immediately elsewhere.
#[allow(clippy::unused_async)]
pub async fn sleep_ms(delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
    }
}
