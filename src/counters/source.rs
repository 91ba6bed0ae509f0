//! Counter traits
//!
//! This module provides the interfaces between the recorder and a host
//! profiler. Real profiler bindings and the [`SyntheticBackend`](super::SyntheticBackend)
//! both plug in here.

use crate::error::Result;

use super::CounterDescriptor;

/// Read-only view of a fixed, ordered set of counters
///
/// This is what the sampler consumes once per frame. The key list must not
/// change during a session.
///
/// # Example
///
/// ```ignore
/// fn frame_time(source: &mut dyn CounterSource) -> Option<f64> {
///     let samples = source.take_samples("CPU Total Frame Time")?;
///     samples.last().copied()
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait CounterSource {
    /// Tracked counter keys, in frame order
    fn counter_keys(&self) -> Vec<String>;

    /// Whether the source is still usable (not released or disposed)
    fn is_active(&self) -> bool;

    /// Samples currently buffered for `key`
    ///
    /// Returns `None` if the source does not track `key`. An empty vector
    /// means the counter is known but produced nothing in the current window.
    fn take_samples(&mut self, key: &str) -> Option<Vec<f64>>;
}

/// A single started counter owned by a [`CounterSet`](super::CounterSet)
pub trait CounterHandle {
    /// Samples buffered by the counter, at most the window it was started with
    fn buffered_samples(&mut self) -> Vec<f64>;

    /// Whether the handle can still be read
    fn is_valid(&self) -> bool;

    /// Stop the counter and give it back to the profiler
    ///
    /// Called exactly once by the owning set.
    fn release(&mut self);
}

/// Host profiler that hands out counter handles
pub trait CounterBackend {
    /// Start a counter keeping at most `window` buffered samples
    fn acquire(
        &mut self,
        descriptor: &CounterDescriptor,
        window: usize,
    ) -> Result<Box<dyn CounterHandle>>;
}
