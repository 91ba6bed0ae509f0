//! Text presentation of frame stats
//!
//! Turns a frame's samples into the lines shown on the stats overlay. Timing
//! counters are stored in nanoseconds and shown as milliseconds plus the
//! frame rate they imply; everything else is shown as a whole number.
//!
//! A counter is a timing counter when its key contains `Frame Time`, or is
//! exactly [`MAIN_THREAD_KEY`] or [`VFX_UPDATE_KEY`].
//!
//! # Example output
//!
//! ```text
//! --- Profiler Stats ---
//! CPU Total Frame Time: <color=red>20.00</color> ms <color=red>50</color> fps
//! Draw Calls Count: 137
//! ```

pub mod overlay;

pub use overlay::StatsOverlay;

use crate::counters::{MAIN_THREAD_KEY, VFX_UPDATE_KEY};
use crate::types::{CameraPose, StatSample};

/// First line of every rendered block
pub const HEADER: &str = "--- Profiler Stats ---";

/// Color used to highlight values below the frame-rate threshold
pub const WARNING_COLOR: &str = "red";

/// How warnings are marked in rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    /// `<color=red>…</color>` tags around warned figures
    #[default]
    RichText,
    /// No markup; callers read [`StatLine::is_warning`] instead
    Plain,
}

/// One formatted overlay line
#[derive(Debug, Clone, PartialEq)]
pub enum StatLine {
    /// Nanosecond timing shown as ms and implied fps
    Timing {
        key: String,
        ms: f64,
        fps: f64,
        warning: bool,
    },
    /// Plain counter shown with zero decimals
    Count { key: String, value: f64 },
}

impl StatLine {
    /// Build the line for one sample
    pub fn from_sample(sample: &StatSample, fps_warning_threshold: f64) -> Self {
        if is_timing_key(&sample.key) {
            let ms = sample.value * 1e-6;
            let fps = if ms > 0.0 { 1000.0 / ms } else { 0.0 };
            StatLine::Timing {
                key: sample.key.clone(),
                ms,
                fps,
                warning: fps < fps_warning_threshold,
            }
        } else {
            StatLine::Count {
                key: sample.key.clone(),
                value: sample.value,
            }
        }
    }

    pub fn key(&self) -> &str {
        match self {
            StatLine::Timing { key, .. } | StatLine::Count { key, .. } => key,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, StatLine::Timing { warning: true, .. })
    }

    /// Render as text
    pub fn render(&self, markup: Markup) -> String {
        match self {
            StatLine::Timing {
                key,
                ms,
                fps,
                warning,
            } => {
                let ms_text = format!("{ms:.2}");
                // Truncated toward zero, the figure is indicative only.
                let fps_text = (*fps as i64).to_string();
                if *warning && markup == Markup::RichText {
                    format!(
                        "{key}: {} ms {} fps",
                        highlight(&ms_text),
                        highlight(&fps_text)
                    )
                } else {
                    format!("{key}: {ms_text} ms {fps_text} fps")
                }
            }
            StatLine::Count { key, value } => format!("{key}: {value:.0}"),
        }
    }
}

fn highlight(text: &str) -> String {
    format!("<color={WARNING_COLOR}>{text}</color>")
}

/// Whether `key` names a nanosecond timing counter
pub fn is_timing_key(key: &str) -> bool {
    key.contains("Frame Time") || key == MAIN_THREAD_KEY || key == VFX_UPDATE_KEY
}

/// Format each sample into a line, in input order
pub fn format_lines(samples: &[StatSample], fps_warning_threshold: f64) -> Vec<StatLine> {
    samples
        .iter()
        .map(|s| StatLine::from_sample(s, fps_warning_threshold))
        .collect()
}

/// Render samples as overlay text with rich-text warnings
pub fn render(samples: &[StatSample], fps_warning_threshold: f64) -> String {
    render_with(samples, fps_warning_threshold, Markup::RichText)
}

/// Render samples as overlay text: header line, then one line per sample
pub fn render_with(samples: &[StatSample], fps_warning_threshold: f64, markup: Markup) -> String {
    std::iter::once(HEADER.to_string())
        .chain(
            format_lines(samples, fps_warning_threshold)
                .iter()
                .map(|line| line.render(markup)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Camera Position: x, y, z" with two decimals
pub fn camera_label(camera: Option<&CameraPose>) -> String {
    match camera {
        Some(pose) => format!(
            "Camera Position: {:.2}, {:.2}, {:.2}",
            pose.position.x, pose.position.y, pose.position.z
        ),
        None => "Camera Position: none".to_string(),
    }
}
