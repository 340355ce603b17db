//! Page controller.
//!
//! Collects the elements once at mount, owns every behavior and exposes one
//! entry point per browser event. The `dom` bindings only translate events
//! into these calls; tests drive them directly against the fake host.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::PortfolioConfig;
use crate::debounce::Debounce;
use crate::images::ImageStyling;
use crate::markup::{
    ANIMATED_ELEMENTS, CLICKABLE_IMAGES, CTA_BUTTON, HAMBURGER_ID, HERO_CONTENT, IMAGES, LOADED,
    MODAL_CAPTION_ID, MODAL_CLOSE_ID, MODAL_ID, MODAL_IMAGE_ID, NAVBAR_ID, NAV_LINKS, NAV_MENU_ID,
    PROGRESS_BARS, SECTIONS, TAB_BUTTONS, TAB_PANELS,
};
use crate::modal::{decorate_thumbnail, is_activation_key, Activation, Modal, ModalParts, ModalTimings};
use crate::navbar::NavbarController;
use crate::progress::schedule_fill;
use crate::reveal::ScrollReveal;
use crate::scroll_lock::ScrollLock;
use crate::sections::SectionHighlighter;
use crate::smooth_scroll::{follow_link, scroll_to_section};
use crate::surface::{Host, Surface};
use crate::tabs::{TabSelection, TabSwitcher};
use crate::timing::Scheduler;
use crate::touch::TouchTracker;

/// The two scroll handlers that share one debounced subscription.
struct ScrollEffects<H: Host> {
    host: Rc<H>,
    highlighter: SectionHighlighter<H::Element>,
    reveal: ScrollReveal<H::Element>,
}

impl<H: Host> ScrollEffects<H> {
    fn tick(&self) {
        self.highlighter.on_tick(self.host.scroll_y());
        self.reveal.on_tick(self.host.viewport());
    }
}

pub struct Page<H: Host, S: Scheduler> {
    host: Rc<H>,
    config: PortfolioConfig,
    navbar: Option<NavbarController<H::Element>>,
    hamburger: Option<H::Element>,
    nav_links: Vec<H::Element>,
    tabs: TabSwitcher<H::Element>,
    modal: Option<Modal<H::Element, S>>,
    thumbnails: Vec<H::Element>,
    cta: Option<H::Element>,
    images: Vec<H::Element>,
    styling: ImageStyling,
    scroll_lock: Rc<ScrollLock<H::Element>>,
    scroll_effects: Rc<ScrollEffects<H>>,
    scroll_debounce: Debounce<S>,
    touch: TouchTracker,
    progress_timers: Vec<S::Handle>,
    finalized: Cell<bool>,
}

impl<H: Host, S: Scheduler> Page<H, S> {
    pub fn mount(host: H, scheduler: S, config: PortfolioConfig) -> Self {
        let host = Rc::new(host);

        let hamburger = host.element_by_id(HAMBURGER_ID);
        let navbar = match host.element_by_id(NAVBAR_ID) {
            Some(navbar) => Some(NavbarController::new(
                navbar,
                hamburger.clone(),
                host.element_by_id(NAV_MENU_ID),
                config.scrolled_threshold,
            )),
            None => {
                tracing::warn!("page: #{NAVBAR_ID} missing, navbar behavior disabled");
                None
            }
        };
        let nav_links = host.query_all(NAV_LINKS);

        let tabs = TabSwitcher::new(host.query_all(TAB_BUTTONS), host.query_all(TAB_PANELS));

        let scroll_lock = ScrollLock::new(host.body());
        let modal = match host.element_by_id(MODAL_ID) {
            Some(container) => Some(Modal::new(
                ModalParts {
                    container,
                    image: host.element_by_id(MODAL_IMAGE_ID),
                    caption: host.element_by_id(MODAL_CAPTION_ID),
                    close: host.element_by_id(MODAL_CLOSE_ID),
                },
                ModalTimings {
                    reveal: config.modal_reveal_delay(),
                    transition: config.modal_transition(),
                    focus: config.modal_focus_delay(),
                },
                scheduler.clone(),
                Rc::clone(&scroll_lock),
            )),
            None => {
                tracing::warn!("page: #{MODAL_ID} missing, image zoom disabled");
                None
            }
        };
        let thumbnails = host.query_all(CLICKABLE_IMAGES);
        for thumbnail in &thumbnails {
            decorate_thumbnail(thumbnail, &config.zoom_label_prefix);
        }

        let scroll_effects = Rc::new(ScrollEffects {
            host: Rc::clone(&host),
            highlighter: SectionHighlighter::new(
                host.query_all(SECTIONS),
                nav_links.clone(),
                config.section_probe_offset,
            ),
            reveal: ScrollReveal::new(
                host.query_all(ANIMATED_ELEMENTS),
                config.reveal_animation.clone(),
            ),
        });
        scroll_effects.reveal.on_tick(host.viewport());

        let effects = Rc::clone(&scroll_effects);
        let scroll_debounce =
            Debounce::new(scheduler.clone(), config.scroll_debounce(), move || effects.tick());

        let progress_bars = host.query_all(PROGRESS_BARS);
        let progress_timers = schedule_fill(&progress_bars, &scheduler, config.progress_delay());

        tracing::info!(
            "page: mounted, {} clickable images, {} tabs, {} sections, {} progress bars",
            thumbnails.len(),
            tabs.buttons().len(),
            scroll_effects.highlighter.section_count(),
            progress_bars.len()
        );

        Self {
            cta: host.query(CTA_BUTTON),
            images: host.query_all(IMAGES),
            styling: ImageStyling {
                placeholder_background: config.placeholder_background.clone(),
                placeholder_color: config.placeholder_color.clone(),
            },
            host,
            config,
            navbar,
            hamburger,
            nav_links,
            tabs,
            modal,
            thumbnails,
            scroll_lock,
            scroll_effects,
            scroll_debounce,
            touch: TouchTracker::default(),
            progress_timers,
            finalized: Cell::new(false),
        }
    }

    pub fn hamburger(&self) -> Option<&H::Element> {
        self.hamburger.as_ref()
    }

    pub fn nav_links(&self) -> &[H::Element] {
        &self.nav_links
    }

    pub fn tab_buttons(&self) -> &[H::Element] {
        self.tabs.buttons()
    }

    pub fn modal(&self) -> Option<&Modal<H::Element, S>> {
        self.modal.as_ref()
    }

    pub fn thumbnails(&self) -> &[H::Element] {
        &self.thumbnails
    }

    pub fn cta(&self) -> Option<&H::Element> {
        self.cta.as_ref()
    }

    pub fn images(&self) -> &[H::Element] {
        &self.images
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn pending_progress_fills(&self) -> usize {
        self.progress_timers.len()
    }

    pub fn on_scroll(&self) {
        if let Some(navbar) = &self.navbar {
            navbar.on_scroll(self.host.scroll_y());
        }
        self.scroll_debounce.call();
    }

    pub fn on_hamburger_click(&self) {
        if let Some(navbar) = &self.navbar {
            navbar.toggle_menu();
        }
    }

    pub fn on_document_click(&self, target: Option<&H::Element>) {
        if let Some(navbar) = &self.navbar {
            navbar.on_document_click(target);
        }
    }

    /// Returns true when the browser's jump navigation should be prevented.
    pub fn on_nav_link_click(&self, link: &H::Element) -> bool {
        if let Some(navbar) = &self.navbar {
            navbar.close_menu();
        }
        let href = link.attribute("href");
        follow_link(self.host.as_ref(), href.as_deref(), self.config.header_offset)
    }

    pub fn on_cta_click(&self) -> bool {
        scroll_to_section(
            self.host.as_ref(),
            &self.config.cta_target,
            self.config.header_offset,
        )
    }

    pub fn on_tab_click(&self, button: &H::Element) -> Option<TabSelection> {
        self.tabs.select(button)
    }

    pub fn active_tab(&self) -> Option<String> {
        self.tabs.active()
    }

    pub fn active_section(&self) -> Option<String> {
        self.scroll_effects.highlighter.active()
    }

    pub fn on_thumbnail_click(&self, thumbnail: &H::Element) {
        self.open_thumbnail(thumbnail, Activation::Pointer);
    }

    /// Enter and Space open the zoomed image; the key's default action is
    /// always suppressed for them.
    pub fn on_thumbnail_key(&self, thumbnail: &H::Element, key: &str) -> bool {
        if !is_activation_key(key) {
            return false;
        }
        self.open_thumbnail(thumbnail, Activation::Keyboard);
        true
    }

    pub fn on_close_click(&self) {
        if let Some(modal) = &self.modal {
            if let Err(err) = modal.close() {
                tracing::debug!("modal: {err}");
            }
        }
    }

    pub fn on_modal_click(&self, target: &H::Element) {
        if let Some(modal) = &self.modal {
            modal.on_backdrop_click(target);
        }
    }

    /// Returns true when the key press should not reach the browser.
    pub fn on_modal_key(&self, key: &str) -> bool {
        match &self.modal {
            Some(modal) if key == "Tab" => modal.trap_focus(),
            _ => false,
        }
    }

    pub fn on_document_key(&self, key: &str) {
        if key != "Escape" {
            return;
        }
        if let Some(modal) = &self.modal {
            modal.on_escape();
        }
    }

    pub fn on_image_load(&self, image: &H::Element) {
        self.styling.on_load(image);
    }

    pub fn on_image_error(&self, image: &H::Element) {
        self.styling.on_error(image);
    }

    pub fn on_global_error(&self, target: &H::Element) {
        self.styling.on_global_error(target);
    }

    pub fn on_touch_start(&self, screen_y: f64) {
        self.touch.on_start(screen_y);
    }

    pub fn on_touch_end(&self, screen_y: f64) {
        self.touch.on_end(screen_y);
    }

    /// Window `load`: flags the body and starts the hero animation. Runs once.
    pub fn on_window_load(&self) {
        if self.finalized.replace(true) {
            return;
        }
        if let Some(body) = self.host.body() {
            body.add_class(LOADED);
        }
        if let Some(hero) = self.host.query(HERO_CONTENT) {
            hero.set_style("animation", &self.config.hero_animation);
        }
        tracing::debug!("page: load finalized");
    }

    fn open_thumbnail(&self, thumbnail: &H::Element, activation: Activation) {
        let Some(modal) = &self.modal else {
            return;
        };
        if let Err(err) = modal.open_thumbnail(thumbnail, activation) {
            tracing::debug!("modal: {err}");
        }
    }
}
