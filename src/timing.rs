//! Timer scheduling.
//!
//! Every delayed step goes through a [`Scheduler`]. The returned handle
//! cancels the timer when dropped, so whoever owns the handle owns the
//! timer's lifetime.

use std::time::Duration;

pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::time::Duration;

    use gloo_timers::callback::Timeout;

    use super::Scheduler;

    /// `setTimeout` backed scheduler. Dropping the [`Timeout`] clears it.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        type Handle = Timeout;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, task)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;
