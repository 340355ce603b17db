//! In-memory host document for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::surface::{Host, Rect, Surface, Viewport};

#[derive(Default)]
struct Node {
    tag: String,
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    offset_top: Cell<f64>,
    offset_height: Cell<f64>,
    rect: Cell<Rect>,
    focus_count: Cell<u32>,
    parent: RefCell<Weak<Node>>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_ascii_uppercase(),
            ..Node::default()
        }))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_offset(self, top: f64, height: f64) -> Self {
        self.0.offset_top.set(top);
        self.0.offset_height.set(height);
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.set_rect(rect);
        self
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.rect.set(rect);
    }

    pub fn append(&self, child: &FakeElement) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.styles.borrow().get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn focus_count(&self) -> u32 {
        self.0.focus_count.get()
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .any(|simple| self.matches_simple(simple))
    }

    fn matches_simple(&self, selector: &str) -> bool {
        let tag_end = selector
            .find(|ch: char| matches!(ch, '.' | '#' | '['))
            .unwrap_or(selector.len());
        let (tag, mut rest) = selector.split_at(tag_end);
        if !tag.is_empty() && !self.0.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
        while !rest.is_empty() {
            let kind = rest.as_bytes()[0];
            let body = &rest[1..];
            let end = body
                .find(|ch: char| matches!(ch, '.' | '#' | '[' | ']'))
                .unwrap_or(body.len());
            let name = &body[..end];
            let matched = match kind {
                b'.' => self.has_class(name),
                b'#' => self.attribute("id").as_deref() == Some(name),
                b'[' => self.attribute(name).is_some(),
                _ => false,
            };
            if !matched {
                return false;
            }
            rest = &body[end..];
            if let Some(stripped) = rest.strip_prefix(']') {
                rest = stripped;
            }
        }
        true
    }
}

impl Surface for FakeElement {
    fn add_class(&self, class: &str) {
        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|existing| existing != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|existing| existing == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_string();
    }

    fn source(&self) -> Option<String> {
        self.attribute("src")
    }

    fn tag_name(&self) -> String {
        self.0.tag.clone()
    }

    fn focus(&self) {
        self.0.focus_count.set(self.0.focus_count.get() + 1);
    }

    fn offset_top(&self) -> f64 {
        self.0.offset_top.get()
    }

    fn offset_height(&self) -> f64 {
        self.0.offset_height.get()
    }

    fn bounding_rect(&self) -> Rect {
        self.0.rect.get()
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.0.clone());
        while let Some(node) = current {
            if Rc::ptr_eq(&node, &self.0) {
                return true;
            }
            current = node.parent.borrow().upgrade();
        }
        false
    }
}

/// Elements are kept in insertion order, which stands in for document order.
pub struct FakeHost {
    elements: RefCell<Vec<FakeElement>>,
    body: FakeElement,
    scroll_y: Cell<f64>,
    viewport: Cell<Viewport>,
    scrolls: RefCell<Vec<f64>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            body: FakeElement::new("body"),
            scroll_y: Cell::new(0.0),
            viewport: Cell::new(Viewport {
                width: 1024.0,
                height: 768.0,
            }),
            scrolls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeHost {
    pub fn add(&self, element: FakeElement) -> FakeElement {
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn body_element(&self) -> FakeElement {
        self.body.clone()
    }

    pub fn set_scroll_y(&self, value: f64) {
        self.scroll_y.set(value);
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.viewport.set(Viewport { width, height });
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    /// Adds the navbar, menu, modal and a handful of sections, roughly the
    /// shape of the real page.
    pub fn portfolio() -> Self {
        let host = FakeHost::default();
        let navbar = host.add(FakeElement::new("nav").with_id("navbar"));
        let hamburger = host.add(FakeElement::new("div").with_id("hamburger"));
        let menu = host.add(FakeElement::new("ul").with_id("nav-menu"));
        navbar.append(&hamburger);
        navbar.append(&menu);
        for id in ["home", "kompetensi", "sertifikat"] {
            let link = host.add(
                FakeElement::new("a")
                    .with_class("nav-link")
                    .with_attr("href", &format!("#{id}")),
            );
            menu.append(&link);
        }
        host.add(FakeElement::new("section").with_id("home").with_offset(0.0, 500.0));
        host.add(
            FakeElement::new("section")
                .with_id("kompetensi")
                .with_offset(500.0, 600.0),
        );
        host.add(
            FakeElement::new("section")
                .with_id("sertifikat")
                .with_offset(1100.0, 800.0),
        );
        let modal = host.add(FakeElement::new("div").with_id("imageModal"));
        let image = host.add(FakeElement::new("img").with_id("modalImage"));
        let caption = host.add(FakeElement::new("div").with_id("modalCaption"));
        let close = host.add(FakeElement::new("span").with_id("closeModal"));
        modal.append(&image);
        modal.append(&caption);
        modal.append(&close);
        host
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .find(|element| element.attribute("id").as_deref() == Some(id))
            .cloned()
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|element| element.matches(selector))
            .cloned()
            .collect()
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn scroll_smoothly_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}
