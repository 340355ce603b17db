use std::time::Duration;

use crate::markup::PROGRESS_ATTR;
use crate::surface::Surface;
use crate::timing::Scheduler;

/// Parses a `data-progress` value into a percentage in `[0, 100]`.
pub fn parse_progress(raw: &str) -> Option<f64> {
    let value = raw.trim().trim_end_matches('%').trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, 100.0))
}

pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}

/// Schedules the one-shot fill of every skill bar. Each handle cancels its
/// bar's fill when dropped.
pub fn schedule_fill<E: Surface, S: Scheduler>(
    bars: &[E],
    scheduler: &S,
    delay: Duration,
) -> Vec<S::Handle> {
    bars.iter()
        .filter_map(|bar| {
            let raw = bar.attribute(PROGRESS_ATTR);
            let Some(percent) = raw.as_deref().and_then(parse_progress) else {
                tracing::warn!("progress: unusable {PROGRESS_ATTR} {raw:?}");
                return None;
            };
            let bar = bar.clone();
            Some(scheduler.schedule(
                delay,
                Box::new(move || bar.set_style("width", &width_style(percent))),
            ))
        })
        .collect()
}
