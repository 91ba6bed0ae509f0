//! On-screen stats overlay

use crate::config::RecorderSettings;
use crate::session::{PlaybackController, SessionRecorder};

use super::{render_with, Markup};

/// Decides what the stats box shows and how large
///
/// A loaded playback recording wins over live stats, matching the way a
/// scrubbed frame replaces the live readout until playback is cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsOverlay {
    pub fps_warning_threshold: f64,
    pub font_size: u32,
    pub markup: Markup,
}

impl StatsOverlay {
    pub fn from_settings(settings: &RecorderSettings) -> Self {
        Self {
            fps_warning_threshold: settings.fps_warning_threshold,
            font_size: settings.effective_font_size(),
            markup: Markup::RichText,
        }
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// Text for the stats box, `None` when there is nothing to show
    pub fn text(&self, recorder: &SessionRecorder, player: &PlaybackController) -> Option<String> {
        let frame = match player.current_frame() {
            Ok(frame) => frame,
            Err(_) => recorder.recording().last_frame()?,
        };
        Some(render_with(frame.samples(), self.fps_warning_threshold, self.markup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Recording;
    use crate::types::{FrameRecord, StatSample};

    fn recording_with(value: f64) -> Recording {
        Recording::from_frames([FrameRecord::new(
            0.0,
            vec![StatSample::new("Batches Count", value)],
            None,
        )])
        .unwrap()
    }

    #[test]
    fn test_nothing_to_show() {
        let overlay = StatsOverlay::from_settings(&RecorderSettings::default());
        assert_eq!(overlay.font_size, 14);
        assert!(overlay
            .text(&SessionRecorder::default(), &PlaybackController::new())
            .is_none());
    }

    #[test]
    fn test_playback_wins_over_live() {
        let overlay = StatsOverlay::from_settings(&RecorderSettings::default());
        let recorder = SessionRecorder::default();
        let mut player = PlaybackController::new();
        player.load_recording(recording_with(77.0)).unwrap();

        let text = overlay.text(&recorder, &player).unwrap();
        assert!(text.ends_with("Batches Count: 77"));

        player.clear();
        assert!(overlay.text(&recorder, &player).is_none());
    }

    #[test]
    fn test_live_frame_when_no_playback() {
        use crate::counters::{CounterDescriptor, SyntheticBackend, SyntheticPattern};

        let settings = RecorderSettings::default()
            .with_counters(vec![CounterDescriptor::render("Draw Calls Count")]);
        let overlay = StatsOverlay::from_settings(&settings).with_markup(Markup::Plain);
        let mut backend =
            SyntheticBackend::new().with_default_pattern(SyntheticPattern::Constant(12.0));
        let mut recorder = SessionRecorder::new(settings);

        recorder.start_session_with(&mut backend).unwrap();
        recorder.tick_live(None, 0.0).unwrap();

        let text = overlay.text(&recorder, &PlaybackController::new()).unwrap();
        assert_eq!(text, "--- Profiler Stats ---\nDraw Calls Count: 12");

        recorder.cancel_session();
    }
}
