use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::timing::Scheduler;

/// Trailing-edge debounce: every call pushes the invocation back to `wait`
/// after the most recent call.
pub struct Debounce<S: Scheduler> {
    scheduler: S,
    wait: Duration,
    callback: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debounce<S> {
    pub fn new(scheduler: S, wait: Duration, callback: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            wait,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self) {
        let callback = Rc::clone(&self.callback);
        let handle = self
            .scheduler
            .schedule(self.wait, Box::new(move || callback()));
        // The previous handle is dropped here, which cancels it.
        let _previous = self.pending.replace(Some(handle));
    }

    pub fn cancel(&self) {
        self.pending.replace(None);
    }
}
