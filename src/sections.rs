use std::cell::RefCell;

use crate::markup::ACTIVE;
use crate::smooth_scroll::fragment_target;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The section containing `probe`. Later sections win when ranges overlap.
pub fn section_at(sections: &[SectionBounds], probe: f64) -> Option<&SectionBounds> {
    sections.iter().rev().find(|section| section.contains(probe))
}

/// Marks the nav link of the section currently under the header.
pub struct SectionHighlighter<E: Surface> {
    sections: Vec<E>,
    links: Vec<E>,
    probe_offset: f64,
    active: RefCell<Option<String>>,
}

impl<E: Surface> SectionHighlighter<E> {
    pub fn new(sections: Vec<E>, links: Vec<E>, probe_offset: f64) -> Self {
        Self {
            sections,
            links,
            probe_offset,
            active: RefCell::new(None),
        }
    }

    pub fn active(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Layout is read on every tick since offsets move with images loading
    /// and the viewport resizing.
    fn bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .filter_map(|section| {
                Some(SectionBounds {
                    id: section.id()?,
                    top: section.offset_top(),
                    height: section.offset_height(),
                })
            })
            .collect()
    }

    /// With no section under the probe the previous marker is left alone.
    pub fn on_tick(&self, scroll_y: f64) -> Option<String> {
        let bounds = self.bounds();
        let section = section_at(&bounds, scroll_y + self.probe_offset)?;

        for link in &self.links {
            link.remove_class(ACTIVE);
        }
        let matching = self.links.iter().find(|link| {
            link.attribute("href")
                .as_deref()
                .and_then(fragment_target)
                .is_some_and(|id| id == section.id)
        });
        if let Some(link) = matching {
            link.add_class(ACTIVE);
        }
        *self.active.borrow_mut() = Some(section.id.clone());
        Some(section.id.clone())
    }
}
