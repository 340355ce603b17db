use std::cell::Cell;
use std::rc::Rc;

use crate::surface::Surface;

/// Reference counted page scroll lock.
///
/// The first holder sets `overflow: hidden` on the body and the last one to
/// go sets it back to `auto`, so overlapping holders never leave scrolling
/// disabled.
pub struct ScrollLock<E: Surface> {
    body: Option<E>,
    holders: Cell<usize>,
}

impl<E: Surface> ScrollLock<E> {
    pub fn new(body: Option<E>) -> Rc<Self> {
        Rc::new(Self {
            body,
            holders: Cell::new(0),
        })
    }

    pub fn acquire(self: &Rc<Self>) -> ScrollGuard<E> {
        let holders = self.holders.get();
        if holders == 0 {
            if let Some(body) = &self.body {
                body.set_style("overflow", "hidden");
            }
        }
        self.holders.set(holders + 1);
        ScrollGuard {
            lock: Rc::clone(self),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            if let Some(body) = &self.body {
                body.set_style("overflow", "auto");
            }
        }
    }
}

/// Releases its share of the lock when dropped.
pub struct ScrollGuard<E: Surface> {
    lock: Rc<ScrollLock<E>>,
}

impl<E: Surface> Drop for ScrollGuard<E> {
    fn drop(&mut self) {
        self.lock.release();
    }
}
