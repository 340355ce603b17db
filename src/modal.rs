//! Image lightbox.
//!
//! Opening and closing are driven by an explicit phase machine. Each
//! open/close cycle gets a generation number and owns its timer handles, so
//! a timer left over from an earlier cycle cannot touch a later one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::error::ModalError;
use crate::markup::SHOW;
use crate::scroll_lock::{ScrollGuard, ScrollLock};
use crate::surface::Surface;
use crate::timing::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Keyboard,
}

pub struct ModalParts<E> {
    pub container: E,
    pub image: Option<E>,
    pub caption: Option<E>,
    pub close: Option<E>,
}

#[derive(Clone, Copy, Debug)]
pub struct ModalTimings {
    pub reveal: Duration,
    pub transition: Duration,
    pub focus: Duration,
}

/// Keys that activate a focused thumbnail.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Makes a thumbnail reachable and announced as a button.
pub fn decorate_thumbnail<E: Surface>(thumbnail: &E, label_prefix: &str) {
    let alt = thumbnail.attribute("alt").unwrap_or_default();
    thumbnail.set_attribute("tabindex", "0");
    thumbnail.set_attribute("role", "button");
    thumbnail.set_attribute("aria-label", &format!("{label_prefix}{alt}"));
}

struct Cycle<E: Surface, S: Scheduler> {
    phase: ModalPhase,
    generation: u64,
    guard: Option<ScrollGuard<E>>,
    reveal: Option<S::Handle>,
    focus: Option<S::Handle>,
    hide: Option<S::Handle>,
}

struct Inner<E: Surface, S: Scheduler> {
    parts: ModalParts<E>,
    timings: ModalTimings,
    scheduler: S,
    scroll_lock: Rc<ScrollLock<E>>,
    cycle: RefCell<Cycle<E, S>>,
}

pub struct Modal<E: Surface, S: Scheduler> {
    inner: Rc<Inner<E, S>>,
}

impl<E: Surface, S: Scheduler> Clone for Modal<E, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Surface, S: Scheduler> Modal<E, S> {
    pub fn new(
        parts: ModalParts<E>,
        timings: ModalTimings,
        scheduler: S,
        scroll_lock: Rc<ScrollLock<E>>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                parts,
                timings,
                scheduler,
                scroll_lock,
                cycle: RefCell::new(Cycle {
                    phase: ModalPhase::Closed,
                    generation: 0,
                    guard: None,
                    reveal: None,
                    focus: None,
                    hide: None,
                }),
            }),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.inner.cycle.borrow().phase
    }

    pub fn container(&self) -> &E {
        &self.inner.parts.container
    }

    pub fn close_button(&self) -> Option<&E> {
        self.inner.parts.close.as_ref()
    }

    pub fn open(&self, src: &str, caption: &str, activation: Activation) -> Result<(), ModalError> {
        let inner = &self.inner;
        let mut cycle = inner.cycle.borrow_mut();
        if cycle.phase != ModalPhase::Closed {
            return Err(ModalError::InvalidTransition {
                from: cycle.phase,
                action: "open",
            });
        }
        cycle.generation += 1;
        let generation = cycle.generation;

        if let Some(image) = &inner.parts.image {
            image.set_attribute("src", src);
        }
        if let Some(caption_element) = &inner.parts.caption {
            caption_element.set_text(caption);
        }
        inner.parts.container.set_style("display", "flex");
        cycle.guard = Some(inner.scroll_lock.acquire());
        cycle.phase = ModalPhase::Opening;

        cycle.reveal = Some(self.schedule(inner.timings.reveal, generation, Inner::reveal));
        cycle.focus = match activation {
            Activation::Keyboard => {
                Some(self.schedule(inner.timings.focus, generation, Inner::focus_close))
            }
            Activation::Pointer => None,
        };
        tracing::debug!("modal: open {src}");
        Ok(())
    }

    /// Opens with the thumbnail's image source and alt text.
    pub fn open_thumbnail(&self, thumbnail: &E, activation: Activation) -> Result<(), ModalError> {
        let src = thumbnail.source().unwrap_or_default();
        let alt = thumbnail.attribute("alt").unwrap_or_default();
        self.open(&src, &alt, activation)
    }

    pub fn close(&self) -> Result<(), ModalError> {
        let inner = &self.inner;
        let mut cycle = inner.cycle.borrow_mut();
        if !matches!(cycle.phase, ModalPhase::Opening | ModalPhase::Open) {
            return Err(ModalError::InvalidTransition {
                from: cycle.phase,
                action: "close",
            });
        }
        cycle.reveal = None;
        cycle.focus = None;
        inner.parts.container.remove_class(SHOW);
        cycle.phase = ModalPhase::Closing;
        let generation = cycle.generation;
        cycle.hide = Some(self.schedule(inner.timings.transition, generation, Inner::hide));
        tracing::debug!("modal: close");
        Ok(())
    }

    /// Escape only closes a fully shown modal.
    pub fn on_escape(&self) -> bool {
        if self.phase() != ModalPhase::Open {
            return false;
        }
        self.close().is_ok()
    }

    pub fn on_backdrop_click(&self, target: &E) -> bool {
        if !target.is_same(&self.inner.parts.container) {
            return false;
        }
        self.close().is_ok()
    }

    /// Keeps keyboard focus on the close control while the modal is up.
    /// Returns true when the Tab press should not reach the browser.
    pub fn trap_focus(&self) -> bool {
        if self.phase() == ModalPhase::Closed {
            return false;
        }
        if let Some(close) = &self.inner.parts.close {
            close.focus();
        }
        true
    }

    fn schedule(
        &self,
        delay: Duration,
        generation: u64,
        step: fn(&Inner<E, S>, u64),
    ) -> S::Handle {
        let weak: Weak<Inner<E, S>> = Rc::downgrade(&self.inner);
        self.inner.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    step(&inner, generation);
                }
            }),
        )
    }
}

impl<E: Surface, S: Scheduler> Inner<E, S> {
    fn reveal(&self, generation: u64) {
        let mut cycle = self.cycle.borrow_mut();
        if cycle.generation != generation || cycle.phase != ModalPhase::Opening {
            return;
        }
        self.parts.container.add_class(SHOW);
        cycle.phase = ModalPhase::Open;
    }

    fn focus_close(&self, generation: u64) {
        let cycle = self.cycle.borrow();
        if cycle.generation != generation
            || !matches!(cycle.phase, ModalPhase::Opening | ModalPhase::Open)
        {
            return;
        }
        if let Some(close) = &self.parts.close {
            close.focus();
        }
    }

    fn hide(&self, generation: u64) {
        let mut cycle = self.cycle.borrow_mut();
        if cycle.generation != generation || cycle.phase != ModalPhase::Closing {
            return;
        }
        self.parts.container.set_style("display", "none");
        cycle.phase = ModalPhase::Closed;
        let guard = cycle.guard.take();
        drop(cycle);
        drop(guard);
    }
}
