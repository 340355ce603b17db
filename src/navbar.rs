use std::cell::Cell;

use crate::markup::{ACTIVE, SCROLLED};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Scroll styling for the fixed navbar plus the mobile hamburger menu.
pub struct NavbarController<E: Surface> {
    navbar: E,
    hamburger: Option<E>,
    menu: Option<E>,
    threshold: f64,
    state: Cell<NavbarState>,
}

impl<E: Surface> NavbarController<E> {
    pub fn new(navbar: E, hamburger: Option<E>, menu: Option<E>, threshold: f64) -> Self {
        Self {
            navbar,
            hamburger,
            menu,
            threshold,
            state: Cell::new(NavbarState::default()),
        }
    }

    pub fn state(&self) -> NavbarState {
        self.state.get()
    }

    pub fn on_scroll(&self, offset: f64) {
        let scrolled = is_scrolled(offset, self.threshold);
        if scrolled {
            self.navbar.add_class(SCROLLED);
        } else {
            self.navbar.remove_class(SCROLLED);
        }
        let mut state = self.state.get();
        state.scrolled = scrolled;
        self.state.set(state);
    }

    pub fn toggle_menu(&self) {
        let open = !self.state.get().menu_open;
        self.set_menu(open);
    }

    pub fn close_menu(&self) {
        self.set_menu(false);
    }

    /// Clicks anywhere outside the navbar dismiss the mobile menu.
    pub fn on_document_click(&self, target: Option<&E>) {
        let inside = target.is_some_and(|target| self.navbar.contains(target));
        if !inside {
            self.close_menu();
        }
    }

    fn set_menu(&self, open: bool) {
        for element in self.hamburger.iter().chain(self.menu.iter()) {
            if open {
                element.add_class(ACTIVE);
            } else {
                element.remove_class(ACTIVE);
            }
        }
        let mut state = self.state.get();
        state.menu_open = open;
        self.state.set(state);
    }
}
