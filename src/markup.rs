//! Ids, classes and selectors the stylesheet and markup agree on.

pub const NAVBAR_ID: &str = "navbar";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const MODAL_ID: &str = "imageModal";
pub const MODAL_IMAGE_ID: &str = "modalImage";
pub const MODAL_CAPTION_ID: &str = "modalCaption";
pub const MODAL_CLOSE_ID: &str = "closeModal";
pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";

pub const NAV_LINKS: &str = ".nav-link";
pub const TAB_BUTTONS: &str = ".tab-button";
pub const TAB_PANELS: &str = ".tab-content";
pub const CLICKABLE_IMAGES: &str = ".clickable-image";
pub const ANIMATED_ELEMENTS: &str = ".certificate-card, .gallery-img";
pub const CTA_BUTTON: &str = ".cta-button";
pub const SECTIONS: &str = "section[id]";
pub const PROGRESS_BARS: &str = ".progress-bar";
pub const HERO_CONTENT: &str = ".hero-content";
pub const IMAGES: &str = "img";

pub const TAB_ATTR: &str = "data-tab";
pub const PROGRESS_ATTR: &str = "data-progress";

pub const ACTIVE: &str = "active";
pub const SCROLLED: &str = "scrolled";
pub const SHOW: &str = "show";
pub const LOADED: &str = "loaded";
