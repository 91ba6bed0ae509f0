//! Session data types

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{FrameStatsError, Result};
use crate::types::FrameRecord;

/// State of the recording side of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No session started
    #[default]
    Idle,
    /// Frames are being captured
    Recording,
    /// Session ended, recording frozen
    Stopped,
}

impl SessionState {
    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        matches!(self, SessionState::Recording)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Recording => "Recording",
            SessionState::Stopped => "Stopped",
        }
    }
}

/// State of the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No recording loaded
    #[default]
    Empty,
    /// A recording is loaded and the cursor is valid
    Loaded,
}

impl PlaybackState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, PlaybackState::Loaded)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlaybackState::Empty => "Empty",
            PlaybackState::Loaded => "Loaded",
        }
    }
}

/// Outcome of ending a session that captured frames
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Where the recording was written
    pub path: PathBuf,
    /// Number of frames persisted
    pub frame_count: usize,
    /// Timestamp of the last frame, in seconds
    pub duration: f64,
    /// Wall-clock time the session started
    pub started_at: DateTime<Utc>,
    /// Wall-clock time the file was written
    pub saved_at: DateTime<Utc>,
}

/// Append-only, ordered sequence of frame records
///
/// Insertion order is capture order is frame index. The first frame fixes
/// the key set; every later frame must carry the same keys in the same
/// order, a timestamp no earlier than its predecessor, and finite numbers
/// only. A frame breaking any of these is rejected and the buffer is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recording {
    frames: Vec<FrameRecord>,
    keys: Vec<String>,
}

impl Recording {
    /// Create a new empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a recording from frames, checking every invariant
    pub fn from_frames(frames: impl IntoIterator<Item = FrameRecord>) -> Result<Self> {
        let mut recording = Self::new();
        for frame in frames {
            recording.append(frame)?;
        }
        Ok(recording)
    }

    /// Add a frame to the tail
    pub fn append(&mut self, record: FrameRecord) -> Result<()> {
        self.check(&record)?;

        if self.frames.is_empty() {
            self.keys = record.keys().map(str::to_string).collect();
        }
        self.frames.push(record);
        Ok(())
    }

    fn check(&self, record: &FrameRecord) -> Result<()> {
        let index = self.frames.len();

        if !record.timestamp().is_finite() {
            return Err(FrameStatsError::Invariant(format!(
                "frame {index} has a non-finite timestamp"
            )));
        }

        if let Some(last) = self.frames.last() {
            if record.timestamp() < last.timestamp() {
                return Err(FrameStatsError::Invariant(format!(
                    "frame {index} timestamp {} is earlier than {}",
                    record.timestamp(),
                    last.timestamp()
                )));
            }
            if !record.has_key_set(&self.keys) {
                return Err(FrameStatsError::Invariant(format!(
                    "frame {index} key set {:?} differs from {:?}",
                    record.keys().collect::<Vec<_>>(),
                    self.keys
                )));
            }
        } else {
            let samples = record.samples();
            for (i, sample) in samples.iter().enumerate() {
                if samples[..i].iter().any(|s| s.key == sample.key) {
                    return Err(FrameStatsError::Invariant(format!(
                        "counter '{}' appears twice in one frame",
                        sample.key
                    )));
                }
            }
        }

        if let Some(sample) = record.samples().iter().find(|s| !s.value.is_finite()) {
            return Err(FrameStatsError::Invariant(format!(
                "frame {index} counter '{}' is not finite",
                sample.key
            )));
        }

        if record.camera().is_some_and(|c| !c.is_finite()) {
            return Err(FrameStatsError::Invariant(format!(
                "frame {index} camera pose is not finite"
            )));
        }

        Ok(())
    }

    /// Empty the buffer, back to the pre-session state
    pub fn clear(&mut self) {
        self.frames.clear();
        self.keys.clear();
    }

    /// Get the number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Check if the recording is empty
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, bounds-checked
    pub fn frame_at(&self, index: usize) -> Result<&FrameRecord> {
        self.frames.get(index).ok_or(FrameStatsError::OutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    /// All frames in capture order
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    /// Most recently appended frame
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }

    /// Key set fixed by the first frame (empty before any frame)
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Timestamp of the last frame
    pub fn duration(&self) -> f64 {
        self.frames.last().map(|f| f.timestamp()).unwrap_or(0.0)
    }

    /// Find the frame index at or before a given time
    pub fn find_frame_at(&self, time: f64) -> Option<usize> {
        if self.frames.is_empty() {
            return None;
        }

        let idx = self.frames.partition_point(|f| f.timestamp() <= time);
        if idx == 0 {
            Some(0)
        } else {
            Some(idx - 1)
        }
    }
}
