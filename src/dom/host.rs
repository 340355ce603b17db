use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, Node, ScrollBehavior, ScrollToOptions, Window,
};

use crate::surface::{Host, Rect, Surface, Viewport};

impl Surface for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(self, name, value);
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn source(&self) -> Option<String> {
        match self.dyn_ref::<HtmlImageElement>() {
            Some(image) => Some(image.src()),
            None => self.get_attribute("src"),
        }
    }

    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn focus(&self) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.focus();
        }
    }

    fn offset_top(&self) -> f64 {
        self.dyn_ref::<HtmlElement>()
            .map(|html| f64::from(html.offset_top()))
            .unwrap_or(0.0)
    }

    fn offset_height(&self) -> f64 {
        self.dyn_ref::<HtmlElement>()
            .map(|html| f64::from(html.offset_height()))
            .unwrap_or(0.0)
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            left: rect.left(),
            bottom: rect.bottom(),
            right: rect.right(),
        }
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &Node = other;
        self.is_same_node(Some(other))
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &Node = other;
        Node::contains(self, Some(other))
    }
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Host for BrowserHost {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            tracing::warn!("dom: bad selector {selector}");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport(&self) -> Viewport {
        let root = self.document.document_element();
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .filter(|value| *value > 0.0)
            .or_else(|| root.as_ref().map(|root| f64::from(root.client_width())))
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .filter(|value| *value > 0.0)
            .or_else(|| root.as_ref().map(|root| f64::from(root.client_height())))
            .unwrap_or(0.0);
        Viewport { width, height }
    }

    fn scroll_smoothly_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
