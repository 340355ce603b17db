//! Browser bindings: attaches the page controller to the live document.

mod host;
mod listeners;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, KeyboardEvent, TouchEvent, Window};

pub use host::BrowserHost;
pub use listeners::{Listener, Subscriptions};

use crate::config::{load_runtime_config, PortfolioConfig};
use crate::error::BindError;
use crate::page::Page;
use crate::timing::BrowserScheduler;

type BrowserPage = Page<BrowserHost, BrowserScheduler>;

struct MountedPage {
    // Listeners go first so no callback outlives the page it points at.
    _subscriptions: Subscriptions,
    _page: Rc<BrowserPage>,
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    boot().map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Unbinds every listener and cancels pending timers.
#[wasm_bindgen]
pub fn teardown() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    if mounted.is_some() {
        drop(mounted);
        tracing::info!("dom: page torn down");
    }
}

fn boot() -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    if document.ready_state() != "loading" {
        mount(window, document);
        return Ok(());
    }

    let ready_window = window.clone();
    let ready_document = document.clone();
    let on_ready = Closure::once(move |_event: Event| {
        mount(ready_window, ready_document);
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| BindError::Listener {
            event: "DOMContentLoaded",
            message: format!("{err:?}"),
        })?;
    on_ready.forget();
    Ok(())
}

/// Runs once the document is parsed, so the inline config block is readable.
fn mount(window: Window, document: Document) {
    let (config, config_error) = match load_runtime_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (PortfolioConfig::default(), Some(err)),
    };
    crate::logging::init(&config.log_level);
    if let Some(err) = config_error {
        tracing::warn!("config: {err}, using defaults");
    }

    let host = BrowserHost::new(window.clone(), document.clone());
    let page = Rc::new(Page::mount(host, BrowserScheduler, config));
    let subscriptions = bind(&page, &window, &document);
    if subscriptions.is_empty() {
        tracing::warn!("dom: no listeners attached, page is inert");
    } else {
        tracing::debug!("dom: {} listeners attached", subscriptions.len());
    }

    if document.ready_state() == "complete" {
        page.on_window_load();
    }

    let previous = MOUNTED.with(|slot| {
        slot.borrow_mut().replace(MountedPage {
            _subscriptions: subscriptions,
            _page: page,
        })
    });
    drop(previous);
}

fn bind(page: &Rc<BrowserPage>, window: &Window, document: &Document) -> Subscriptions {
    let mut subscriptions = Subscriptions::default();

    let scroll_page = Rc::clone(page);
    subscriptions.listen(window, "scroll", move |_event| scroll_page.on_scroll());

    if let Some(hamburger) = page.hamburger() {
        let hamburger_page = Rc::clone(page);
        subscriptions.listen(hamburger, "click", move |_event| {
            hamburger_page.on_hamburger_click();
        });
    }

    for link in page.nav_links() {
        let link_page = Rc::clone(page);
        let link_element = link.clone();
        subscriptions.listen(link, "click", move |event| {
            if link_page.on_nav_link_click(&link_element) {
                event.prevent_default();
            }
        });
    }

    let click_page = Rc::clone(page);
    subscriptions.listen(document, "click", move |event| {
        let target = target_element(&event);
        click_page.on_document_click(target.as_ref());
    });

    for button in page.tab_buttons() {
        let tab_page = Rc::clone(page);
        let tab_button = button.clone();
        subscriptions.listen(button, "click", move |_event| {
            tab_page.on_tab_click(&tab_button);
        });
    }

    if let Some(modal) = page.modal() {
        for thumbnail in page.thumbnails() {
            let click_page = Rc::clone(page);
            let clicked = thumbnail.clone();
            subscriptions.listen(thumbnail, "click", move |_event| {
                click_page.on_thumbnail_click(&clicked);
            });

            let key_page = Rc::clone(page);
            let focused = thumbnail.clone();
            subscriptions.listen(thumbnail, "keydown", move |event| {
                let Some(key) = event_key(&event) else {
                    return;
                };
                if key_page.on_thumbnail_key(&focused, &key) {
                    event.prevent_default();
                }
            });
        }

        if let Some(close) = modal.close_button() {
            let close_page = Rc::clone(page);
            subscriptions.listen(close, "click", move |_event| close_page.on_close_click());
        }

        let backdrop_page = Rc::clone(page);
        subscriptions.listen(modal.container(), "click", move |event| {
            if let Some(target) = target_element(&event) {
                backdrop_page.on_modal_click(&target);
            }
        });

        let trap_page = Rc::clone(page);
        subscriptions.listen(modal.container(), "keydown", move |event| {
            let Some(key) = event_key(&event) else {
                return;
            };
            if trap_page.on_modal_key(&key) {
                event.prevent_default();
            }
        });

        let escape_page = Rc::clone(page);
        subscriptions.listen(document, "keydown", move |event| {
            if let Some(key) = event_key(&event) {
                escape_page.on_document_key(&key);
            }
        });
    }

    if let Some(cta) = page.cta() {
        let cta_page = Rc::clone(page);
        subscriptions.listen(cta, "click", move |event| {
            if cta_page.on_cta_click() {
                event.prevent_default();
            }
        });
    }

    for image in page.images() {
        let load_page = Rc::clone(page);
        let loaded = image.clone();
        subscriptions.listen(image, "load", move |_event| load_page.on_image_load(&loaded));

        let error_page = Rc::clone(page);
        let failed = image.clone();
        subscriptions.listen(image, "error", move |_event| error_page.on_image_error(&failed));
    }

    let global_error_page = Rc::clone(page);
    subscriptions.listen_capture(window, "error", move |event| {
        if let Some(target) = target_element(&event) {
            global_error_page.on_global_error(&target);
        }
    });

    let touch_start_page = Rc::clone(page);
    subscriptions.listen(document, "touchstart", move |event| {
        if let Some(screen_y) = touch_screen_y(&event) {
            touch_start_page.on_touch_start(screen_y);
        }
    });
    let touch_end_page = Rc::clone(page);
    subscriptions.listen(document, "touchend", move |event| {
        if let Some(screen_y) = touch_screen_y(&event) {
            touch_end_page.on_touch_end(screen_y);
        }
    });

    let load_page = Rc::clone(page);
    subscriptions.listen(window, "load", move |_event| load_page.on_window_load());

    subscriptions
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn event_key(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

fn touch_screen_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_y()))
}
