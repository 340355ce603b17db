use std::cell::Cell;

/// Records the vertical position of the last touch start and end.
/// Nothing acts on the swipe yet; it is only logged.
#[derive(Debug, Default)]
pub struct TouchTracker {
    start_y: Cell<Option<f64>>,
    end_y: Cell<Option<f64>>,
}

impl TouchTracker {
    pub fn on_start(&self, screen_y: f64) {
        self.start_y.set(Some(screen_y));
        self.end_y.set(None);
    }

    pub fn on_end(&self, screen_y: f64) -> Option<f64> {
        self.end_y.set(Some(screen_y));
        let delta = self.swipe_delta();
        if let Some(delta) = delta {
            tracing::debug!("touch: vertical swipe {delta}px");
        }
        delta
    }

    /// Positive when the finger moved down the screen.
    pub fn swipe_delta(&self) -> Option<f64> {
        Some(self.end_y.get()? - self.start_y.get()?)
    }
}
