use crate::surface::Surface;

/// Inline styling applied to images while they load and when they fail.
#[derive(Clone, Debug)]
pub struct ImageStyling {
    pub placeholder_background: String,
    pub placeholder_color: String,
}

impl ImageStyling {
    /// Per-image `load` handler: stops the shimmer placeholder.
    pub fn on_load<E: Surface>(&self, image: &E) {
        image.set_style("animation", "none");
    }

    /// Per-image `error` handler.
    pub fn on_error<E: Surface>(&self, image: &E) {
        image.set_style("animation", "none");
        image.set_style("background", &self.placeholder_background);
    }

    /// Capturing window-level `error` handler. Covers images that were not
    /// around when the per-image handlers were bound. Returns false for
    /// non-image targets.
    pub fn on_global_error<E: Surface>(&self, target: &E) -> bool {
        if !target.tag_name().eq_ignore_ascii_case("img") {
            return false;
        }
        let source = target.source().unwrap_or_default();
        tracing::warn!("images: failed to load {source}");
        target.set_style("background", &self.placeholder_background);
        target.set_style("color", &self.placeholder_color);
        true
    }
}
