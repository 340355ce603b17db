//! Interactivity for the static portfolio page.
//!
//! The page markup and stylesheet are served as-is; this crate attaches to
//! the existing document and only toggles classes, attributes and inline
//! styles. Everything except [`dom`] is target independent and is exercised
//! natively through the fake host in the test suite.

pub mod config;
pub mod debounce;
pub mod error;
pub mod images;
pub mod logging;
pub mod markup;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod scroll_lock;
pub mod sections;
pub mod smooth_scroll;
pub mod surface;
pub mod tabs;
pub mod timing;
pub mod touch;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PortfolioConfig;
pub use page::Page;
