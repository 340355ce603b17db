use crate::surface::{Rect, Surface, Viewport};

/// True only when the whole box is inside the viewport.
pub fn is_fully_visible(rect: Rect, viewport: Viewport) -> bool {
    rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom <= viewport.height
        && rect.right <= viewport.width
}

/// Fades cards and gallery images in while they sit fully in view.
///
/// Every tick reassigns the animation to each fully visible element. Image
/// load handlers clear it, so a visible image picks it back up on the next
/// settled scroll.
pub struct ScrollReveal<E: Surface> {
    elements: Vec<E>,
    animation: String,
}

impl<E: Surface> ScrollReveal<E> {
    pub fn new(elements: Vec<E>, animation: impl Into<String>) -> Self {
        Self {
            elements,
            animation: animation.into(),
        }
    }

    /// Returns how many elements were fully visible on this tick.
    pub fn on_tick(&self, viewport: Viewport) -> usize {
        let mut visible = 0;
        for element in &self.elements {
            if is_fully_visible(element.bounding_rect(), viewport) {
                element.set_style("animation", &self.animation);
                visible += 1;
            }
        }
        visible
    }
}
