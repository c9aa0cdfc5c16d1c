//! Cancellable batch of one-shot timers.
//!
//! Holds the handles for every timeout started by the latest action.
//! Replacing or clearing the set drops the handles, which cancels any
//! timeout that has not fired yet. Outside the browser scheduling is a no-op.

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[derive(Default)]
pub struct TimerSet {
    #[cfg(feature = "hydrate")]
    pending: Vec<Timeout>,
}

impl TimerSet {
    /// Run `callback` after `delay_ms`.
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.push(Timeout::new(delay_ms, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Cancel every timeout that has not fired yet.
    pub fn cancel_all(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.clear();
        }
    }

    /// Number of timeouts still held.
    #[must_use]
    pub fn len(&self) -> usize {
        #[cfg(feature = "hydrate")]
        {
            self.pending.len()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
