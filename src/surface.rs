//! The seam between the page logic and the host document.
//!
//! Controllers only talk to [`Surface`] elements and a [`Host`]. The browser
//! implementation lives in `dom`; tests use the fakes in `testing`.

/// Bounding box relative to the viewport, as `getBoundingClientRect` reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// A single element of the host document.
///
/// Handles are cheap to clone and compare by node identity in
/// [`Surface::is_same`].
pub trait Surface: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn set_style(&self, property: &str, value: &str);
    fn set_text(&self, text: &str);

    /// Resolved image source for `img` elements, the raw `src` otherwise.
    fn source(&self) -> Option<String>;
    fn tag_name(&self) -> String;
    fn focus(&self);

    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    fn bounding_rect(&self) -> Rect;

    fn is_same(&self, other: &Self) -> bool;
    /// True when `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    fn id(&self) -> Option<String> {
        self.attribute("id")
    }
}

/// Document and window level queries.
pub trait Host: 'static {
    type Element: Surface;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    fn scroll_y(&self) -> f64;
    fn viewport(&self) -> Viewport;
    fn scroll_smoothly_to(&self, top: f64);
}
