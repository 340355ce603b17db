use std::cell::RefCell;

use crate::markup::{ACTIVE, TAB_ATTR};
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    pub tab: String,
    /// False when no panel carries the button's `data-tab` id. The button is
    /// still marked active in that case and no panel is.
    pub panel_found: bool,
}

pub struct TabSwitcher<E: Surface> {
    buttons: Vec<E>,
    panels: Vec<E>,
    active: RefCell<Option<String>>,
}

impl<E: Surface> TabSwitcher<E> {
    pub fn new(buttons: Vec<E>, panels: Vec<E>) -> Self {
        let active = panels
            .iter()
            .find(|panel| panel.has_class(ACTIVE))
            .and_then(Surface::id);
        Self {
            buttons,
            panels,
            active: RefCell::new(active),
        }
    }

    pub fn buttons(&self) -> &[E] {
        &self.buttons
    }

    pub fn active(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    /// Activates `button` and the panel named by its `data-tab`.
    pub fn select(&self, button: &E) -> Option<TabSelection> {
        let tab = button.attribute(TAB_ATTR)?;

        for other in &self.buttons {
            other.remove_class(ACTIVE);
        }
        for panel in &self.panels {
            panel.remove_class(ACTIVE);
        }
        button.add_class(ACTIVE);

        let panel = self
            .panels
            .iter()
            .find(|panel| panel.id().as_deref() == Some(tab.as_str()));
        let panel_found = match panel {
            Some(panel) => {
                panel.add_class(ACTIVE);
                true
            }
            None => {
                tracing::warn!("tabs: no panel with id '{tab}'");
                false
            }
        };

        *self.active.borrow_mut() = panel_found.then(|| tab.clone());
        Some(TabSelection { tab, panel_found })
    }
}
