//! Core data types for FrameStats-RS
//!
//! # Main Types
//!
//! - [`StatSample`] - One named counter value for one frame
//! - [`Vec3`] / [`Quat`] - Camera position and rotation
//! - [`CameraPose`] - Position plus rotation of the main camera
//! - [`FrameRecord`] - Everything captured for one rendered frame
//!
//! A frame without a camera carries `None` for its pose. "No camera" is kept
//! distinct from "camera at the origin".

use serde::{Deserialize, Serialize};

/// A named numeric measurement for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSample {
    /// Counter key, stable across frames
    pub key: String,
    /// Averaged counter value
    pub value: f64,
}

impl StatSample {
    /// Create a new sample
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Rotation quaternion (x, y, z, w)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around the Y axis
    pub fn from_rotation_y(angle: f64) -> Self {
        let half = angle * 0.5;
        Self::new(0.0, half.sin(), 0.0, half.cos())
    }

    /// Quaternion norm
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

/// Transform of the main camera at capture time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Check that every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

/// One recorded frame
///
/// Immutable once built. The sampler creates one per rendered frame and
/// the recording that stores it owns it from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    timestamp: f64,
    samples: Vec<StatSample>,
    camera: Option<CameraPose>,
}

impl FrameRecord {
    /// Create a frame record
    pub fn new(timestamp: f64, samples: Vec<StatSample>, camera: Option<CameraPose>) -> Self {
        Self {
            timestamp,
            samples,
            camera,
        }
    }

    /// Seconds since the recording started
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Counter values in tracked order
    pub fn samples(&self) -> &[StatSample] {
        &self.samples
    }

    /// Camera pose, if a camera existed when the frame was captured
    pub fn camera(&self) -> Option<&CameraPose> {
        self.camera.as_ref()
    }

    pub fn camera_position(&self) -> Option<Vec3> {
        self.camera.map(|c| c.position)
    }

    pub fn camera_rotation(&self) -> Option<Quat> {
        self.camera.map(|c| c.rotation)
    }

    /// Look up a counter value by key
    pub fn value(&self, key: &str) -> Option<f64> {
        self.samples.iter().find(|s| s.key == key).map(|s| s.value)
    }

    /// Iterate the counter keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|s| s.key.as_str())
    }

    /// Check whether this frame carries exactly `keys`, in the same order
    pub fn has_key_set(&self, keys: &[String]) -> bool {
        self.samples.len() == keys.len() && self.keys().zip(keys).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quat_identity_is_unit() {
        assert_eq!(Quat::default(), Quat::IDENTITY);
        assert!((Quat::IDENTITY.length() - 1.0).abs() < 1e-12);
        assert!((Quat::from_rotation_y(1.3).length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_lookup() {
        let frame = FrameRecord::new(
            0.5,
            vec![StatSample::new("GPU Frame Time", 4.0e6), StatSample::new("Batches Count", 12.0)],
            None,
        );

        assert_eq!(frame.value("Batches Count"), Some(12.0));
        assert_eq!(frame.value("Vertices Count"), None);
        assert!(frame.camera().is_none());
        assert_eq!(frame.keys().collect::<Vec<_>>(), ["GPU Frame Time", "Batches Count"]);
    }

    #[test]
    fn test_has_key_set_is_order_sensitive() {
        let frame = FrameRecord::new(0.0, vec![StatSample::new("a", 1.0), StatSample::new("b", 2.0)], None);
        assert!(frame.has_key_set(&["a".to_string(), "b".to_string()]));
        assert!(!frame.has_key_set(&["b".to_string(), "a".to_string()]));
        assert!(!frame.has_key_set(&["a".to_string()]));
    }

    #[test]
    fn test_camera_at_origin_is_not_missing() {
        let frame = FrameRecord::new(0.0, vec![], Some(CameraPose::default()));
        assert_eq!(frame.camera_position(), Some(Vec3::ZERO));
        assert_eq!(frame.camera_rotation(), Some(Quat::IDENTITY));
    }
}
