//! Synthetic counter backend
//!
//! Generates counter values from simple patterns so a session can run with
//! no profiler attached. Each read of a handle advances that counter by one
//! frame and returns the rolling window, the same shape a real profiler
//! recorder hands back.
//!
//! # Example
//!
//! ```ignore
//! use framestats_rs::counters::{standard_counters, CounterSet, SyntheticBackend, SyntheticPattern};
//!
//! let mut backend = SyntheticBackend::new()
//!     .with_default_pattern(SyntheticPattern::Constant(100.0))
//!     .with_pattern("CPU Total Frame Time", SyntheticPattern::Sine {
//!         period: 120.0,
//!         amplitude: 2.0e6,
//!         offset: 16.6e6,
//!     });
//!
//! let counters = CounterSet::acquire(&mut backend, &standard_counters(), 60)?;
//! ```

use std::cell::Cell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::f64::consts::TAU;
use std::rc::Rc;

use crate::error::{FrameStatsError, Result};

use super::{CounterBackend, CounterDescriptor, CounterHandle};

/// Pattern for generating counter values, indexed by frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyntheticPattern {
    /// Constant value
    Constant(f64),
    /// Sine wave, `period` in frames
    Sine {
        period: f64,
        amplitude: f64,
        offset: f64,
    },
    /// Linear ramp
    Ramp { start: f64, step: f64 },
    /// Alternates between `low` and `high` every `period` frames
    Step { low: f64, high: f64, period: u64 },
}

impl Default for SyntheticPattern {
    fn default() -> Self {
        SyntheticPattern::Constant(0.0)
    }
}

impl SyntheticPattern {
    /// Value for the given frame index
    pub fn value_at(&self, frame: u64) -> f64 {
        match *self {
            SyntheticPattern::Constant(v) => v,
            SyntheticPattern::Sine {
                period,
                amplitude,
                offset,
            } => {
                if period <= 0.0 {
                    return offset;
                }
                offset + amplitude * (TAU * frame as f64 / period).sin()
            }
            SyntheticPattern::Ramp { start, step } => start + step * frame as f64,
            SyntheticPattern::Step { low, high, period } => {
                if period == 0 || (frame / period) % 2 == 0 {
                    low
                } else {
                    high
                }
            }
        }
    }
}

/// Counter backend driven by [`SyntheticPattern`]s
#[derive(Debug, Default)]
pub struct SyntheticBackend {
    default_pattern: SyntheticPattern,
    patterns: HashMap<String, SyntheticPattern>,
    unavailable: HashSet<String>,
    live: Rc<Cell<usize>>,
    disposed: Rc<Cell<bool>>,
}

impl SyntheticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern used for counters without their own
    pub fn with_default_pattern(mut self, pattern: SyntheticPattern) -> Self {
        self.default_pattern = pattern;
        self
    }

    /// Pattern for one counter key
    pub fn with_pattern(mut self, key: impl Into<String>, pattern: SyntheticPattern) -> Self {
        self.patterns.insert(key.into(), pattern);
        self
    }

    /// Make acquisition of `key` fail
    pub fn with_unavailable(mut self, key: impl Into<String>) -> Self {
        self.unavailable.insert(key.into());
        self
    }

    /// Number of handles acquired and not yet released
    pub fn live_handles(&self) -> usize {
        self.live.get()
    }

    /// Invalidate every handle handed out so far, as a profiler shutdown would
    pub fn dispose(&self) {
        self.disposed.set(true);
    }
}

impl CounterBackend for SyntheticBackend {
    fn acquire(
        &mut self,
        descriptor: &CounterDescriptor,
        window: usize,
    ) -> Result<Box<dyn CounterHandle>> {
        if self.unavailable.contains(&descriptor.key) {
            return Err(FrameStatsError::CounterUnavailable(format!(
                "'{}' is not provided by this backend",
                descriptor.key
            )));
        }

        let pattern = self
            .patterns
            .get(&descriptor.key)
            .copied()
            .unwrap_or(self.default_pattern);

        self.live.set(self.live.get() + 1);

        Ok(Box::new(SyntheticHandle {
            pattern,
            frame: 0,
            window: VecDeque::with_capacity(window),
            capacity: window,
            live: Rc::clone(&self.live),
            disposed: Rc::clone(&self.disposed),
            released: false,
        }))
    }
}

struct SyntheticHandle {
    pattern: SyntheticPattern,
    frame: u64,
    window: VecDeque<f64>,
    capacity: usize,
    live: Rc<Cell<usize>>,
    disposed: Rc<Cell<bool>>,
    released: bool,
}

impl CounterHandle for SyntheticHandle {
    fn buffered_samples(&mut self) -> Vec<f64> {
        if self.capacity == 0 {
            return Vec::new();
        }

        if self.window.len() >= self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(self.pattern.value_at(self.frame));
        self.frame += 1;

        self.window.iter().copied().collect()
    }

    fn is_valid(&self) -> bool {
        !self.released && !self.disposed.get()
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.live.set(self.live.get().saturating_sub(1));
        }
    }
}
