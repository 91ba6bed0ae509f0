//! Recording file format
//!
//! A recording is stored as one JSON document:
//!
//! ```text
//! {
//!   "frames": [
//!     {
//!       "time": 0.016,
//!       "stats": [ { "key": "Main Thread", "value": 8250000.0 }, ... ],
//!       "cameraPosition": { "x": 0.0, "y": 1.0, "z": -10.0 },
//!       "cameraRotation": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 }
//!     }
//!   ]
//! }
//! ```
//!
//! Fields are written in that order for every frame and numbers use the
//! shortest representation that reads back to the same `f64`, so encoding
//! is deterministic and `decode(encode(r)) == r`. Frames captured without a
//! camera omit both camera fields.
//!
//! Decoding is all-or-nothing: malformed JSON, an empty frame list, a frame
//! with only half a camera pose, or frames breaking the recording
//! invariants all yield [`FrameStatsError::Corrupt`] and no recording.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FrameStatsError, Result};
use crate::types::{CameraPose, FrameRecord, Quat, StatSample, Vec3};

use super::types::Recording;

#[derive(Debug, Serialize, Deserialize)]
struct RecordingDocument {
    frames: Vec<FrameDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameDocument {
    time: f64,
    stats: Vec<StatSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    camera_position: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    camera_rotation: Option<Quat>,
}

impl From<&FrameRecord> for FrameDocument {
    fn from(frame: &FrameRecord) -> Self {
        Self {
            time: frame.timestamp(),
            stats: frame.samples().to_vec(),
            camera_position: frame.camera_position(),
            camera_rotation: frame.camera_rotation(),
        }
    }
}

impl FrameDocument {
    fn into_record(self, index: usize) -> Result<FrameRecord> {
        let camera = match (self.camera_position, self.camera_rotation) {
            (Some(position), Some(rotation)) => Some(CameraPose::new(position, rotation)),
            (None, None) => None,
            _ => {
                return Err(FrameStatsError::Corrupt(format!(
                    "frame {index} has only one of cameraPosition/cameraRotation"
                )))
            }
        };
        Ok(FrameRecord::new(self.time, self.stats, camera))
    }
}

/// Serialize a recording to the file representation
///
/// An empty recording is never written and yields
/// [`FrameStatsError::EmptyRecording`].
pub fn encode(recording: &Recording) -> Result<Vec<u8>> {
    if recording.is_empty() {
        return Err(FrameStatsError::EmptyRecording);
    }

    let document = RecordingDocument {
        frames: recording.frames().iter().map(FrameDocument::from).collect(),
    };

    serde_json::to_vec_pretty(&document)
        .map_err(|e| FrameStatsError::Invariant(format!("failed to encode recording: {e}")))
}

/// Rebuild a recording from its file representation
pub fn decode(bytes: &[u8]) -> Result<Recording> {
    let document: RecordingDocument =
        serde_json::from_slice(bytes).map_err(|e| FrameStatsError::Corrupt(e.to_string()))?;

    if document.frames.is_empty() {
        return Err(FrameStatsError::Corrupt(
            "recording contains no frames".to_string(),
        ));
    }

    let mut recording = Recording::new();
    for (index, frame) in document.frames.into_iter().enumerate() {
        recording
            .append(frame.into_record(index)?)
            .map_err(|e| match e {
                FrameStatsError::Invariant(msg) => FrameStatsError::Corrupt(msg),
                other => other,
            })?;
    }

    Ok(recording)
}

/// Encode and write a recording to `path`, creating parent directories
pub fn write_file(path: &Path, recording: &Recording) -> Result<()> {
    let bytes = encode(recording)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;

    tracing::info!(
        "Saved {} frames of profiler stats to {}",
        recording.frame_count(),
        path.display()
    );
    Ok(())
}

/// Read the bytes of a recording file
///
/// A missing file is reported as [`FrameStatsError::NotFound`], never as
/// corruption.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FrameStatsError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FrameStatsError::Io(e),
    })
}

/// Read and decode a recording file
pub fn read_file(path: &Path) -> Result<Recording> {
    decode(&read_bytes(path)?)
}
