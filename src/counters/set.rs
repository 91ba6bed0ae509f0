//! Scoped ownership of started counters

use std::fmt;

use crate::error::{FrameStatsError, Result, ResultExt};

use super::{CounterBackend, CounterDescriptor, CounterHandle, CounterSource};

/// Ordered mapping from counter key to its started handle
///
/// Handles are acquired together and released together. Release happens on
/// [`CounterSet::release`] or, failing that, when the set is dropped, so a
/// session torn down abruptly still gives every counter back.
pub struct CounterSet {
    entries: Vec<(String, Box<dyn CounterHandle>)>,
    released: bool,
}

impl fmt::Debug for CounterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterSet")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("released", &self.released)
            .finish()
    }
}

impl CounterSet {
    /// Acquire one handle per descriptor, in order
    ///
    /// Duplicate keys are rejected. If any acquisition fails, the handles
    /// already started are released before the error is returned.
    pub fn acquire(
        backend: &mut dyn CounterBackend,
        descriptors: &[CounterDescriptor],
        window: usize,
    ) -> Result<Self> {
        let mut set = CounterSet {
            entries: Vec::with_capacity(descriptors.len()),
            released: false,
        };

        for descriptor in descriptors {
            if set.entries.iter().any(|(key, _)| *key == descriptor.key) {
                return Err(FrameStatsError::Config(format!(
                    "Counter '{}' is listed more than once",
                    descriptor.key
                )));
            }

            let handle = backend
                .acquire(descriptor, window)
                .with_context(|| format!("Failed to start counter '{}'", descriptor.key))?;
            set.entries.push((descriptor.key.clone(), handle));
        }

        tracing::debug!("Acquired {} counters", set.entries.len());
        Ok(set)
    }

    /// Number of counters held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter keys in acquisition order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Check if the handles have been given back
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Release every handle; later calls do nothing
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        for (_, handle) in &mut self.entries {
            handle.release();
        }
        self.released = true;
        tracing::debug!("Released {} counters", self.entries.len());
    }
}

impl CounterSource for CounterSet {
    fn counter_keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    fn is_active(&self) -> bool {
        !self.released && self.entries.iter().all(|(_, h)| h.is_valid())
    }

    fn take_samples(&mut self, key: &str) -> Option<Vec<f64>> {
        if self.released {
            return None;
        }
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, handle)| handle.buffered_samples())
    }
}

impl Drop for CounterSet {
    fn drop(&mut self) {
        self.release();
    }
}
