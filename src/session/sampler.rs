//! Per-frame sampling
//!
//! Reads every tracked counter once and folds its buffered window into a
//! single value. Keeps no state between calls; the counter source owns the
//! windows.

use crate::counters::CounterSource;
use crate::error::{FrameStatsError, Result};
use crate::types::{CameraPose, FrameRecord, StatSample};

/// Capture one frame from `source`
///
/// Every key reported by the source becomes one sample, in the source's
/// order, holding the arithmetic mean of that counter's buffered samples
/// (0 when the window is empty). A disposed source or a key the source
/// cannot read fails the whole frame instead of recording zeros.
pub fn capture_frame(
    source: &mut dyn CounterSource,
    camera: Option<CameraPose>,
    elapsed: f64,
) -> Result<FrameRecord> {
    if !source.is_active() {
        return Err(FrameStatsError::CounterUnavailable(
            "counter source is released or disposed".to_string(),
        ));
    }

    let keys = source.counter_keys();
    let mut samples = Vec::with_capacity(keys.len());

    for key in keys {
        let window = source.take_samples(&key).ok_or_else(|| {
            FrameStatsError::CounterUnavailable(format!("'{key}' is not tracked by the source"))
        })?;
        samples.push(StatSample {
            value: window_average(&window),
            key,
        });
    }

    tracing::trace!("Captured frame at {:.3}s with {} counters", elapsed, samples.len());
    Ok(FrameRecord::new(elapsed, samples, camera))
}

/// Arithmetic mean of a sample window, 0 when empty
pub fn window_average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}
