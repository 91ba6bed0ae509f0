//! Configuration module for FrameStats-RS
//!
//! This module handles where recordings live and how the recorder is set up:
//! - Application data directory and recording file naming
//! - [`RecorderSettings`], persisted as TOML
//!
//! # App Data Location
//!
//! Recordings are written to the platform-appropriate data directory:
//! - **Linux**: `~/.local/share/dev.hxyulin.framestats-rs/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.framestats-rs/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.framestats-rs\`
//!
//! # Files
//!
//! - `settings.toml` - Recorder settings
//! - `<scene>_ProfilerStats.json` - One recording per scene
//!
//! # Example
//!
//! ```ignore
//! use framestats_rs::config::{settings_path, RecorderSettings};
//!
//! let settings = match settings_path() {
//!     Some(path) => RecorderSettings::load_or_default(&path),
//!     None => RecorderSettings::default(),
//! };
//! let path = settings.recording_path()?;
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{FrameStatsError, Result};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.framestats-rs";

/// Settings filename
pub const SETTINGS_FILE: &str = "settings.toml";

/// Suffix appended to the scene name to form a recording filename
pub const RECORDING_FILE_SUFFIX: &str = "_ProfilerStats.json";

/// Scene name used when none is given
pub const DEFAULT_SCENE_NAME: &str = "Untitled";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        FrameStatsError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            FrameStatsError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the settings file
pub fn settings_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(SETTINGS_FILE))
}

// ==================== Recording Files ====================

/// `<scene>_ProfilerStats.json`, with path separators in the scene name replaced
pub fn recording_file_name(scene_name: &str) -> String {
    let scene = scene_name.trim();
    let scene = if scene.is_empty() {
        DEFAULT_SCENE_NAME.to_string()
    } else {
        scene.replace(['/', '\\', ':'], "_")
    };
    format!("{scene}{RECORDING_FILE_SUFFIX}")
}

/// Default recording path for a scene inside the app data directory
pub fn default_recording_path(scene_name: &str) -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(recording_file_name(scene_name)))
}

/// Recording files in `dir`, sorted by name
///
/// A missing directory yields an empty list.
pub fn list_recordings(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut recordings = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_recording = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(RECORDING_FILE_SUFFIX));
        if is_recording && path.is_file() {
            recordings.push(path);
        }
    }

    recordings.sort();
    Ok(recordings)
}
