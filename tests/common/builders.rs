//! Test data builders for creating test objects

use framestats_rs::{CameraPose, FrameRecord, Quat, Recording, StatSample, Vec3};

/// Builder for creating test recordings
pub struct RecordingBuilder {
    keys: Vec<String>,
    frames: Vec<FrameRecord>,
}

impl RecordingBuilder {
    pub fn new(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            frames: Vec::new(),
        }
    }

    /// Add a frame where every counter holds `value`
    pub fn frame(mut self, time: f64, value: f64) -> Self {
        let samples = self
            .keys
            .iter()
            .map(|k| StatSample::new(k.clone(), value))
            .collect();
        let camera = CameraPose::new(Vec3::new(time, 1.0, -10.0), Quat::from_rotation_y(time));
        self.frames.push(FrameRecord::new(time, samples, Some(camera)));
        self
    }

    /// Add `count` frames 1/60 s apart, values counting up from 0
    pub fn frames(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.frame(i as f64 / 60.0, i as f64);
        }
        self
    }

    pub fn build(self) -> Recording {
        Recording::from_frames(self.frames).expect("builder frames share one key set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_builder() {
        let recording = RecordingBuilder::new(&["a", "b"]).frames(3).build();

        assert_eq!(recording.frame_count(), 3);
        assert_eq!(recording.keys(), ["a", "b"]);
        assert_eq!(recording.frame_at(2).unwrap().value("b"), Some(2.0));
    }
}
