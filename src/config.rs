use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

const MAX_DELAY_MS: u64 = 5_000;

/// Runtime knobs for the page. The timing values have to track the CSS
/// transition durations, so they all live here instead of at the call sites.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub scrolled_threshold: f64,
    pub header_offset: f64,
    pub section_probe_offset: f64,
    pub scroll_debounce_ms: u64,
    pub modal_reveal_delay_ms: u64,
    pub modal_transition_ms: u64,
    pub modal_focus_delay_ms: u64,
    pub progress_delay_ms: u64,
    pub reveal_animation: String,
    pub hero_animation: String,
    pub placeholder_background: String,
    pub placeholder_color: String,
    pub zoom_label_prefix: String,
    pub cta_target: String,
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            header_offset: 70.0,
            section_probe_offset: 100.0,
            scroll_debounce_ms: 10,
            modal_reveal_delay_ms: 10,
            modal_transition_ms: 300,
            modal_focus_delay_ms: 350,
            progress_delay_ms: 200,
            reveal_animation: "fadeInUp 0.6s ease forwards".to_string(),
            hero_animation: "fadeInUp 1s ease".to_string(),
            placeholder_background: "#f0f0f0".to_string(),
            placeholder_color: "#999".to_string(),
            zoom_label_prefix: "Klik untuk memperbesar gambar: ".to_string(),
            cta_target: "kompetensi".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PortfolioConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: PortfolioConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Ok(parsed.normalized())
    }

    /// Clamps delays and replaces non-finite offsets with their defaults.
    pub fn normalized(mut self) -> Self {
        let defaults = PortfolioConfig::default();
        self.scrolled_threshold = finite_or(self.scrolled_threshold, defaults.scrolled_threshold);
        self.header_offset = finite_or(self.header_offset, defaults.header_offset);
        self.section_probe_offset =
            finite_or(self.section_probe_offset, defaults.section_probe_offset);
        self.scroll_debounce_ms = self.scroll_debounce_ms.min(MAX_DELAY_MS);
        self.modal_reveal_delay_ms = self.modal_reveal_delay_ms.min(MAX_DELAY_MS);
        self.modal_transition_ms = self.modal_transition_ms.min(MAX_DELAY_MS);
        self.modal_focus_delay_ms = self.modal_focus_delay_ms.min(MAX_DELAY_MS);
        self.progress_delay_ms = self.progress_delay_ms.min(MAX_DELAY_MS);
        if self.cta_target.trim().is_empty() {
            self.cta_target = defaults.cta_target;
        }
        self
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    pub fn modal_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.modal_reveal_delay_ms)
    }

    pub fn modal_transition(&self) -> Duration {
        Duration::from_millis(self.modal_transition_ms)
    }

    pub fn modal_focus_delay(&self) -> Duration {
        Duration::from_millis(self.modal_focus_delay_ms)
    }

    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(self.progress_delay_ms)
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Config from the text of the inline config block. A page without the
/// block runs on defaults.
pub fn inline_config(raw: Option<&str>) -> Result<PortfolioConfig, ConfigError> {
    match raw {
        Some(raw) => PortfolioConfig::from_json(raw),
        None => Ok(PortfolioConfig::default()),
    }
}

/// Reads `#portfolio-config`. Call once the document has been parsed, or the
/// block may not exist yet.
#[cfg(target_arch = "wasm32")]
pub fn load_runtime_config(document: &web_sys::Document) -> Result<PortfolioConfig, ConfigError> {
    let raw = document
        .get_element_by_id(crate::markup::CONFIG_SCRIPT_ID)
        .and_then(|node| node.text_content());
    inline_config(raw.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_runtime_config() -> Result<PortfolioConfig, ConfigError> {
    inline_config(None)
}
