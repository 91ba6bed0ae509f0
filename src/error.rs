//! Error handling for FrameStats-RS
//!
//! This module defines the crate error type and a Result alias. Every
//! condition here is recoverable and surfaced to the caller as a typed
//! outcome; nothing in the crate retries or substitutes defaults on failure.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FrameStats-RS operations
#[derive(Error, Debug)]
pub enum FrameStatsError {
    /// The recording file does not exist
    #[error("Recording not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The bytes do not decode to a well-formed recording
    #[error("Corrupt recording: {0}")]
    Corrupt(String),

    /// Frame index outside `[0, len - 1]`
    #[error("Frame index {index} out of range (frame count {len})")]
    OutOfRange { index: usize, len: usize },

    /// Operation issued in a state that does not support it
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A frame broke the recording invariants (key set, ordering, finite values)
    #[error("Recording invariant violated: {0}")]
    Invariant(String),

    /// The counter source is missing, disposed, or lacks a tracked counter
    #[error("Counter unavailable: {0}")]
    CounterUnavailable(String),

    /// Attempt to persist a recording with no frames
    #[error("Refusing to persist an empty recording")]
    EmptyRecording,

    /// Errors related to settings loading/saving and logging setup
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FrameStatsError>,
    },
}

impl FrameStatsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FrameStatsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping context wrappers
    pub fn root(&self) -> &FrameStatsError {
        match self {
            FrameStatsError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this is a missing-file error
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), FrameStatsError::NotFound { .. })
    }

    /// Check if this is a decode failure
    pub fn is_corrupt(&self) -> bool {
        matches!(self.root(), FrameStatsError::Corrupt(_))
    }
}

/// Result type alias for FrameStats-RS operations
pub type Result<T> = std::result::Result<T, FrameStatsError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
