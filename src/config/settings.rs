//! Recorder settings
//!
//! Settings are stored as TOML. Every field has a default, so a partial file
//! (or none at all) is valid. Out-of-range values are clamped on load rather
//! than rejected.
//!
//! ```toml
//! scene_name = "SampleScene"
//! fps_warning_threshold = 45.0
//! font_size = 16
//! sample_window = 60
//!
//! [[counters]]
//! key = "CPU Total Frame Time"
//! category = "Render"
//!
//! [logging]
//! filter = "info"
//! log_to_file = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::counters::{standard_counters, CounterDescriptor, DEFAULT_SAMPLE_WINDOW};
use crate::error::{FrameStatsError, Result};

use super::{ensure_app_data_dir, recording_file_name, DEFAULT_SCENE_NAME};

/// Lowest allowed frame-rate warning threshold
pub const MIN_FPS_WARNING_THRESHOLD: f64 = 10.0;

/// Highest allowed frame-rate warning threshold
pub const MAX_FPS_WARNING_THRESHOLD: f64 = 120.0;

/// Frame-rate warning threshold used when none is configured
pub const DEFAULT_FPS_WARNING_THRESHOLD: f64 = 30.0;

/// Overlay font size used when `font_size` is 0
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Smallest explicit overlay font size
pub const MIN_FONT_SIZE: u32 = 8;

/// Largest explicit overlay font size
pub const MAX_FONT_SIZE: u32 = 128;

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info,framestats_rs=debug";

/// Settings for recording, playback display, and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecorderSettings {
    /// Scene name used to name the recording file
    #[serde(default = "default_scene_name")]
    pub scene_name: String,

    /// Frame rate below which timing figures are highlighted
    #[serde(default = "default_fps_warning_threshold")]
    pub fps_warning_threshold: f64,

    /// Overlay font size, 0 for the host default
    #[serde(default)]
    pub font_size: u32,

    /// Samples each counter keeps buffered for averaging
    #[serde(default = "default_sample_window")]
    pub sample_window: usize,

    /// Directory for recordings, instead of the app data directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Counters to track, in frame order
    #[serde(default = "standard_counters")]
    pub counters: Vec<CounterDescriptor>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_scene_name() -> String {
    DEFAULT_SCENE_NAME.to_string()
}

fn default_fps_warning_threshold() -> f64 {
    DEFAULT_FPS_WARNING_THRESHOLD
}

fn default_sample_window() -> usize {
    DEFAULT_SAMPLE_WINDOW
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            scene_name: default_scene_name(),
            fps_warning_threshold: DEFAULT_FPS_WARNING_THRESHOLD,
            font_size: 0,
            sample_window: DEFAULT_SAMPLE_WINDOW,
            output_dir: None,
            counters: standard_counters(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RecorderSettings {
    /// Create settings for a scene
    pub fn new(scene_name: impl Into<String>) -> Self {
        Self {
            scene_name: scene_name.into(),
            ..Default::default()
        }
    }

    /// Write recordings into `dir`
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Track `counters` instead of the standard set
    pub fn with_counters(mut self, counters: Vec<CounterDescriptor>) -> Self {
        self.counters = counters;
        self
    }

    /// Set the warning threshold, clamped to the allowed range
    pub fn set_fps_warning_threshold(&mut self, threshold: f64) {
        self.fps_warning_threshold = clamp_threshold(threshold);
    }

    /// Clamp every field into its allowed range
    pub fn normalize(&mut self) {
        self.fps_warning_threshold = clamp_threshold(self.fps_warning_threshold);
        if self.font_size != 0 {
            self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
    }

    /// Font size the overlay should use
    pub fn effective_font_size(&self) -> u32 {
        if self.font_size == 0 {
            DEFAULT_FONT_SIZE
        } else {
            self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        }
    }

    /// Directory recordings are written to, created if needed
    pub fn recording_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|e| {
                    FrameStatsError::Config(format!(
                        "Failed to create recording directory {:?}: {}",
                        dir, e
                    ))
                })?;
                Ok(dir.clone())
            }
            None => ensure_app_data_dir(),
        }
    }

    /// Full path of this scene's recording file
    pub fn recording_path(&self) -> Result<PathBuf> {
        Ok(self.recording_dir()?.join(recording_file_name(&self.scene_name)))
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FrameStatsError::Config(format!("Failed to read settings {:?}: {}", path, e))
        })?;

        let mut settings: Self = toml::from_str(&content).map_err(|e| {
            FrameStatsError::Config(format!("Failed to parse settings {:?}: {}", path, e))
        })?;
        settings.normalize();
        Ok(settings)
    }

    /// Load settings, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                FrameStatsError::Config(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| FrameStatsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            FrameStatsError::Config(format!("Failed to write settings {:?}: {}", path, e))
        })
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_FPS_WARNING_THRESHOLD
    } else {
        threshold.clamp(MIN_FPS_WARNING_THRESHOLD, MAX_FPS_WARNING_THRESHOLD)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Also write logs to a daily rolling file
    #[serde(default)]
    pub log_to_file: bool,

    /// Directory for log files, instead of `<app data>/logs`
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            log_to_file: false,
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RecorderSettings::default();
        assert_eq!(settings.fps_warning_threshold, 30.0);
        assert_eq!(settings.counters.len(), 12);
        assert_eq!(settings.sample_window, 60);
        assert_eq!(settings.effective_font_size(), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_threshold_clamping() {
        let mut settings = RecorderSettings::default();
        settings.set_fps_warning_threshold(500.0);
        assert_eq!(settings.fps_warning_threshold, 120.0);
        settings.set_fps_warning_threshold(1.0);
        assert_eq!(settings.fps_warning_threshold, 10.0);
        settings.set_fps_warning_threshold(f64::NAN);
        assert_eq!(settings.fps_warning_threshold, 30.0);
    }

    #[test]
    fn test_font_size() {
        let mut settings = RecorderSettings::default();
        settings.font_size = 4;
        assert_eq!(settings.effective_font_size(), 8);
        settings.font_size = 200;
        assert_eq!(settings.effective_font_size(), 128);
        settings.font_size = 20;
        assert_eq!(settings.effective_font_size(), 20);
    }

    #[test]
    fn test_partial_toml() {
        let settings: RecorderSettings = toml::from_str(
            r#"
            scene_name = "Forest"
            fps_warning_threshold = 45.0

            [[counters]]
            key = "GPU Frame Time"
            "#,
        )
        .unwrap();

        assert_eq!(settings.scene_name, "Forest");
        assert_eq!(settings.fps_warning_threshold, 45.0);
        assert_eq!(settings.counters, vec![CounterDescriptor::render("GPU Frame Time")]);
        assert_eq!(settings.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = RecorderSettings::new("Desert").with_output_dir(dir.path());
        settings.font_size = 300;
        settings.save(&path).unwrap();

        let loaded = RecorderSettings::load(&path).unwrap();
        assert_eq!(loaded.scene_name, "Desert");
        assert_eq!(loaded.font_size, 128);
        assert_eq!(loaded.output_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_load_or_default_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "fps_warning_threshold = \"fast\"").unwrap();

        assert_eq!(RecorderSettings::load_or_default(&path), RecorderSettings::default());
    }

    #[test]
    fn test_recording_path_uses_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RecorderSettings::new("Cave").with_output_dir(dir.path().join("out"));

        let path = settings.recording_path().unwrap();
        assert_eq!(path, dir.path().join("out").join("Cave_ProfilerStats.json"));
        assert!(dir.path().join("out").is_dir());
    }
}
