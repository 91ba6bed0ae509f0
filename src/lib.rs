//! # FrameStats-RS: Per-Frame Profiler Stat Recorder
//!
//! Samples a fixed set of profiler counters once per rendered frame, keeps
//! them in memory for the length of a session, writes the session to a JSON
//! file when it ends, and later loads that file so an operator can scrub
//! through the recorded frames and put the camera back where each one was
//! captured.
//!
//! ## Architecture
//!
//! - **Counters**: the host profiler, reached through [`counters::CounterSource`]
//! - **Sampler**: one [`FrameRecord`] per frame, each counter averaged over its window
//! - **Recording**: append-only buffer of frames with a fixed key set
//! - **Codec**: `<scene>_ProfilerStats.json` read and write
//! - **Playback**: random-access cursor over a loaded recording
//! - **Presenter**: overlay text with low frame-rate highlighting
//!
//! Write path: counters → sampler → recording → codec (session end).
//! Read path: codec (load) → playback → presenter → host display.
//!
//! ## Example
//!
//! ```ignore
//! use framestats_rs::{
//!     counters::SyntheticBackend, presenter, PlaybackController, RecorderSettings,
//!     SessionRecorder,
//! };
//!
//! let settings = RecorderSettings::new("SampleScene");
//! let mut backend = SyntheticBackend::new();
//! let mut recorder = SessionRecorder::new(settings.clone());
//!
//! recorder.start_session_with(&mut backend)?;
//! for frame in 0..3 {
//!     let record = recorder.tick_live(camera_pose(), frame as f64 / 60.0)?;
//!     display(&presenter::render(record.samples(), settings.fps_warning_threshold));
//! }
//! let summary = recorder.end_session()?;
//!
//! let mut player = PlaybackController::new();
//! player.load_default(&settings)?;
//! player.seek(2)?;
//! move_camera(player.camera_pose()?);
//! ```

pub mod config;
pub mod counters;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::{LoggingConfig, RecorderSettings};
pub use counters::{CounterBackend, CounterSet, CounterSource};
pub use error::{FrameStatsError, Result};
pub use presenter::StatsOverlay;
pub use session::{PlaybackController, Recording, SessionRecorder, SessionSummary};
pub use types::{CameraPose, FrameRecord, Quat, StatSample, Vec3};
