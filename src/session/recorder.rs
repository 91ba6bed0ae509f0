//! Session recorder for capturing frame stats
//!
//! A session is bracketed by [`SessionRecorder::start_session`] and
//! [`SessionRecorder::end_session`]. In between, the host calls `tick` once
//! per rendered frame. Ending a session that captured at least one frame
//! writes `<scene>_ProfilerStats.json`; ending an empty one writes nothing.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::config::RecorderSettings;
use crate::counters::{CounterBackend, CounterSet, CounterSource};
use crate::error::{FrameStatsError, Result};
use crate::presenter;
use crate::types::{CameraPose, FrameRecord};

use super::codec;
use super::sampler::capture_frame;
use super::types::{Recording, SessionState, SessionSummary};

/// Live frame-stat recorder
#[derive(Debug)]
pub struct SessionRecorder {
    /// Settings the session was created with
    settings: RecorderSettings,
    /// Current recording state
    state: SessionState,
    /// Frames captured so far
    recording: Recording,
    /// Counters acquired for this session, released when it ends
    counters: Option<CounterSet>,
    /// Wall-clock start of the current session
    started_at: Option<DateTime<Utc>>,
    /// First camera pose seen this session
    original_camera: Option<CameraPose>,
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new(RecorderSettings::default())
    }
}

impl SessionRecorder {
    /// Create a new session recorder
    pub fn new(settings: RecorderSettings) -> Self {
        Self {
            settings,
            state: SessionState::Idle,
            recording: Recording::new(),
            counters: None,
            started_at: None,
            original_camera: None,
        }
    }

    pub fn settings(&self) -> &RecorderSettings {
        &self.settings
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if recording
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// Get the current recording
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Get number of recorded frames
    pub fn frame_count(&self) -> usize {
        self.recording.frame_count()
    }

    /// Wall-clock start of the current or last session
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Camera pose at the first captured frame, for restoring the camera
    /// once playback is done
    pub fn original_camera(&self) -> Option<CameraPose> {
        self.original_camera
    }

    /// Whether this session owns acquired counters
    pub fn has_counters(&self) -> bool {
        self.counters.is_some()
    }

    /// Start a new session with an empty recording
    pub fn start_session(&mut self) -> Result<()> {
        if self.is_recording() {
            return Err(FrameStatsError::InvalidState(
                "a recording session is already running".to_string(),
            ));
        }

        self.recording.clear();
        self.started_at = Some(Utc::now());
        self.original_camera = None;
        self.state = SessionState::Recording;

        tracing::info!("Started recording session for '{}'", self.settings.scene_name);
        Ok(())
    }

    /// Acquire the configured counters from `backend`, then start a session
    ///
    /// The counters are held until the session ends, is cancelled, or the
    /// recorder is dropped.
    pub fn start_session_with(&mut self, backend: &mut dyn CounterBackend) -> Result<()> {
        if self.is_recording() {
            return Err(FrameStatsError::InvalidState(
                "a recording session is already running".to_string(),
            ));
        }

        let counters = CounterSet::acquire(
            backend,
            &self.settings.counters,
            self.settings.sample_window,
        )?;
        self.counters = Some(counters);
        self.start_session()
    }

    /// Capture one frame from `source` and append it
    ///
    /// Returns the stored record so the same frame can be displayed live.
    pub fn tick(
        &mut self,
        source: &mut dyn CounterSource,
        camera: Option<CameraPose>,
        time: f64,
    ) -> Result<&FrameRecord> {
        self.ensure_recording()?;
        let frame = capture_frame(source, camera, time)?;
        self.push_frame(frame)
    }

    /// Capture one frame from the counters acquired at session start
    pub fn tick_live(&mut self, camera: Option<CameraPose>, time: f64) -> Result<&FrameRecord> {
        self.ensure_recording()?;
        let counters = self.counters.as_mut().ok_or_else(|| {
            FrameStatsError::CounterUnavailable(
                "no counters were acquired for this session".to_string(),
            )
        })?;
        let frame = capture_frame(counters, camera, time)?;
        self.push_frame(frame)
    }

    fn ensure_recording(&self) -> Result<()> {
        if self.is_recording() {
            Ok(())
        } else {
            Err(FrameStatsError::InvalidState(format!(
                "cannot record a frame while {}",
                self.state.display_name()
            )))
        }
    }

    fn push_frame(&mut self, frame: FrameRecord) -> Result<&FrameRecord> {
        if self.original_camera.is_none() {
            self.original_camera = frame.camera().copied();
        }

        if let Err(e) = self.recording.append(frame) {
            tracing::error!("Sampler produced an inconsistent frame: {}", e);
            return Err(e);
        }

        self.recording.frame_at(self.recording.frame_count() - 1)
    }

    /// Stats text for the most recent frame
    pub fn live_text(&self, fps_warning_threshold: f64) -> Option<String> {
        self.recording
            .last_frame()
            .map(|frame| presenter::render(frame.samples(), fps_warning_threshold))
    }

    /// End the session and persist it to the configured recording path
    ///
    /// Returns `None` without touching the filesystem if no frame was captured.
    pub fn end_session(&mut self) -> Result<Option<SessionSummary>> {
        self.finish(None)
    }

    /// End the session and persist it to `path`
    pub fn end_session_to(&mut self, path: impl AsRef<Path>) -> Result<Option<SessionSummary>> {
        self.finish(Some(path.as_ref()))
    }

    fn finish(&mut self, path: Option<&Path>) -> Result<Option<SessionSummary>> {
        if !self.is_recording() {
            return Err(FrameStatsError::InvalidState(format!(
                "no session to end while {}",
                self.state.display_name()
            )));
        }

        self.release_counters();
        self.state = SessionState::Stopped;

        if self.recording.is_empty() {
            tracing::info!("Session ended with no frames captured, nothing saved");
            return Ok(None);
        }

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.settings.recording_path()?,
        };
        self.save(&path).map(Some)
    }

    /// Write the frozen recording of a stopped session to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<SessionSummary> {
        if self.state != SessionState::Stopped {
            return Err(FrameStatsError::InvalidState(format!(
                "can only save a stopped session, recorder is {}",
                self.state.display_name()
            )));
        }

        let path: PathBuf = path.as_ref().to_path_buf();
        codec::write_file(&path, &self.recording)?;

        Ok(SessionSummary {
            path,
            frame_count: self.recording.frame_count(),
            duration: self.recording.duration(),
            started_at: self.started_at.unwrap_or_else(Utc::now),
            saved_at: Utc::now(),
        })
    }

    /// Stop the session and discard its frames without writing anything
    pub fn cancel_session(&mut self) {
        self.release_counters();
        self.recording.clear();
        self.started_at = None;
        self.original_camera = None;
        self.state = SessionState::Idle;
    }

    /// Take the recording, leaving the recorder idle
    pub fn take_recording(&mut self) -> Recording {
        self.release_counters();
        self.state = SessionState::Idle;
        self.started_at = None;
        std::mem::take(&mut self.recording)
    }

    fn release_counters(&mut self) {
        if let Some(mut counters) = self.counters.take() {
            counters.release();
        }
    }
}

impl Drop for SessionRecorder {
    fn drop(&mut self) {
        if self.is_recording() && !self.recording.is_empty() {
            tracing::warn!(
                "Recorder dropped mid-session, {} frames were not saved",
                self.recording.frame_count()
            );
        }
        self.release_counters();
    }
}
