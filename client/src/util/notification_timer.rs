//! Owned auto-clear timer for the board notification.
//!
//! One `NotificationTimer` exists per board. Scheduling replaces the pending
//! `gloo-timers` timeout, and dropping a `Timeout` cancels it, so at most one
//! clear is ever pending. Requires a browser environment; on the server the
//! timer is inert.

use std::time::Duration;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Copyable handle to the board's single pending clear.
#[derive(Clone, Copy)]
pub struct NotificationTimer {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl NotificationTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `on_fire` after `after`, cancelling any previously scheduled run.
    pub fn schedule(&self, after: Duration, on_fire: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, on_fire);
            // Assigning drops the old timeout, which cancels it.
            self.pending.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (after, on_fire);
        }
    }
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::new()
    }
}
