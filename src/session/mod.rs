//! Frame stat recording and playback
//!
//! This module holds the write path and the read path of a frame-stat
//! recording:
//!
//! - [`sampler`] turns one frame's counter windows and camera into a [`FrameRecord`](crate::types::FrameRecord)
//! - [`Recording`] is the append-only buffer of those records
//! - [`SessionRecorder`] brackets a live session and persists it on end
//! - [`codec`] reads and writes the `<scene>_ProfilerStats.json` document
//! - [`PlaybackController`] holds a loaded recording and seeks through it
//!
//! # Threading
//!
//! Everything here runs on the thread that owns the render state. Sampling,
//! appending and formatting are bounded by the counter count. File I/O only
//! happens at session boundaries (end of session, explicit load or save) and
//! must never be called from the per-frame path.

pub mod codec;
pub mod player;
pub mod recorder;
pub mod sampler;
pub mod types;

pub use player::PlaybackController;
pub use recorder::SessionRecorder;
pub use types::{PlaybackState, Recording, SessionState, SessionSummary};
