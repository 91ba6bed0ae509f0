//! Playback controller for scrubbing through recorded frames
//!
//! Holds at most one loaded recording and a cursor into it. Seeking never
//! moves a camera itself; the host reads [`PlaybackController::camera_pose`]
//! after each seek and drives its camera to that pose.

use std::path::{Path, PathBuf};

use crate::config::RecorderSettings;
use crate::error::{FrameStatsError, Result};
use crate::presenter;
use crate::types::{CameraPose, FrameRecord};

use super::codec;
use super::types::{PlaybackState, Recording};

/// Frame-by-frame player for a loaded recording
#[derive(Debug, Default)]
pub struct PlaybackController {
    /// The recording being played, `None` while empty
    recording: Option<Recording>,
    /// Current frame index, always valid while loaded
    cursor: usize,
    /// File the recording was loaded from
    loaded_path: Option<PathBuf>,
}

impl PlaybackController {
    /// Create an empty controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> PlaybackState {
        if self.recording.is_some() {
            PlaybackState::Loaded
        } else {
            PlaybackState::Empty
        }
    }

    /// Check if a recording is loaded
    pub fn is_loaded(&self) -> bool {
        self.recording.is_some()
    }

    /// Get the loaded recording
    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    /// File the current recording came from, if any
    pub fn loaded_path(&self) -> Option<&Path> {
        self.loaded_path.as_deref()
    }

    /// Current frame index (0 while empty)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of frames loaded (0 while empty)
    pub fn frame_count(&self) -> usize {
        self.recording.as_ref().map_or(0, Recording::frame_count)
    }

    /// Decode `bytes` and replace the current recording
    ///
    /// On failure the controller keeps whatever it held before.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let recording = codec::decode(bytes)?;
        self.install(recording, None);
        Ok(())
    }

    /// Read and decode a recording file
    ///
    /// A missing file is [`FrameStatsError::NotFound`], a malformed one
    /// [`FrameStatsError::Corrupt`]; either way the controller is unchanged.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let recording = codec::read_file(path).inspect_err(|e| {
            tracing::warn!("Failed to load profiler stats from {}: {}", path.display(), e);
        })?;

        tracing::info!(
            "Loaded {} frames of profiler stats from {}",
            recording.frame_count(),
            path.display()
        );
        self.install(recording, Some(path.to_path_buf()));
        Ok(())
    }

    /// Load the scene's recording from the configured location
    pub fn load_default(&mut self, settings: &RecorderSettings) -> Result<()> {
        let path = settings.recording_path()?;
        self.load_file(path)
    }

    /// Adopt an in-memory recording
    pub fn load_recording(&mut self, recording: Recording) -> Result<()> {
        if recording.is_empty() {
            return Err(FrameStatsError::EmptyRecording);
        }
        self.install(recording, None);
        Ok(())
    }

    fn install(&mut self, recording: Recording, path: Option<PathBuf>) {
        self.recording = Some(recording);
        self.cursor = 0;
        self.loaded_path = path;
    }

    /// Write the loaded recording to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        codec::write_file(path.as_ref(), self.loaded()?)
    }

    /// Drop the loaded recording and reset the cursor
    pub fn clear(&mut self) {
        self.recording = None;
        self.cursor = 0;
        self.loaded_path = None;
    }

    fn loaded(&self) -> Result<&Recording> {
        self.recording
            .as_ref()
            .ok_or_else(|| FrameStatsError::InvalidState("no recording loaded".to_string()))
    }

    /// Move the cursor to `index`, clamped into the loaded frame range
    ///
    /// Returns the new cursor.
    pub fn seek(&mut self, index: i64) -> Result<usize> {
        let last = self.loaded()?.frame_count() - 1;
        self.cursor = usize::try_from(index.max(0)).unwrap_or(usize::MAX).min(last);
        tracing::trace!("Playback seek to frame {}", self.cursor);
        Ok(self.cursor)
    }

    /// Move the cursor to the last frame at or before `time` seconds
    pub fn seek_time(&mut self, time: f64) -> Result<usize> {
        let index = self.loaded()?.find_frame_at(time).unwrap_or(0);
        self.cursor = index;
        Ok(index)
    }

    /// Step forward by one frame, stopping at the last
    pub fn step_forward(&mut self) -> Result<usize> {
        let next = self.cursor.saturating_add(1);
        self.seek(i64::try_from(next).unwrap_or(i64::MAX))
    }

    /// Step backward by one frame, stopping at the first
    pub fn step_backward(&mut self) -> Result<usize> {
        let prev = self.cursor.saturating_sub(1);
        self.seek(i64::try_from(prev).unwrap_or(i64::MAX))
    }

    /// Frame under the cursor
    pub fn current_frame(&self) -> Result<&FrameRecord> {
        self.loaded()?.frame_at(self.cursor)
    }

    /// Frame at an explicit index
    pub fn frame_at(&self, index: usize) -> Result<&FrameRecord> {
        self.loaded()?.frame_at(index)
    }

    /// Camera pose of the current frame, `None` if it had no camera
    pub fn camera_pose(&self) -> Result<Option<CameraPose>> {
        Ok(self.current_frame()?.camera().copied())
    }

    /// Stats text of the current frame
    pub fn stats_text(&self, fps_warning_threshold: f64) -> Result<String> {
        Ok(presenter::render(
            self.current_frame()?.samples(),
            fps_warning_threshold,
        ))
    }

    /// "Camera Position: x, y, z" label of the current frame
    pub fn camera_label(&self) -> Result<String> {
        Ok(presenter::camera_label(self.current_frame()?.camera()))
    }

    /// Timestamp of the last frame (0 while empty)
    pub fn duration(&self) -> f64 {
        self.recording.as_ref().map_or(0.0, Recording::duration)
    }

    /// Cursor position as a fraction of the frame range (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        let count = self.frame_count();
        if count <= 1 {
            return 0.0;
        }
        self.cursor as f64 / (count - 1) as f64
    }
}
