use crate::surface::{Host, Surface};

/// In-page fragment id of an href, if it has one. `"#"` alone and external
/// links yield `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

pub fn scroll_destination(target_top: f64, header_offset: f64) -> f64 {
    target_top - header_offset
}

/// Scrolls to the element with `id`, compensating for the fixed header.
/// Returns false when there is no such element, so the caller can let the
/// browser handle the click.
pub fn scroll_to_section<H: Host>(host: &H, id: &str, header_offset: f64) -> bool {
    let Some(target) = host.element_by_id(id) else {
        tracing::debug!("smooth-scroll: no element '#{id}'");
        return false;
    };
    let top = scroll_destination(target.offset_top(), header_offset);
    host.scroll_smoothly_to(top);
    true
}

/// Handles a click on an in-page link. Returns true when the default
/// navigation should be prevented.
pub fn follow_link<H: Host>(host: &H, href: Option<&str>, header_offset: f64) -> bool {
    match href.and_then(fragment_target) {
        Some(id) => scroll_to_section(host, id, header_offset),
        None => false,
    }
}
