//! Counter capability consumed by the sampler
//!
//! A host profiler exposes named numeric counters. This crate never
//! enumerates them; it asks a [`CounterBackend`] for one [`CounterHandle`] per
//! [`CounterDescriptor`] when a session starts and gives every handle back when
//! the session ends. [`CounterSet`] owns that key-to-handle mapping and is what
//! the sampler reads through the [`CounterSource`] trait.
//!
//! # Standard counters
//!
//! [`standard_counters`] lists the twelve counters tracked by default, in the
//! order they appear in every frame record:
//!
//! | Key | Category |
//! |-----|----------|
//! | Main Thread | Internal |
//! | CPU Total Frame Time | Render |
//! | CPU Main Thread Frame Time | Render |
//! | CPU Render Thread Frame Time | Render |
//! | GPU Frame Time | Render |
//! | Batches Count | Render |
//! | Draw Calls Count | Render |
//! | SetPass Calls Count | Render |
//! | Triangles Count | Render |
//! | Vertices Count | Render |
//! | Shadow Casters Count | Render |
//! | VFX.Update | Render |

pub mod set;
pub mod source;
pub mod synthetic;

pub use set::CounterSet;
pub use source::{CounterBackend, CounterHandle, CounterSource};
pub use synthetic::{SyntheticBackend, SyntheticPattern};

use serde::{Deserialize, Serialize};

/// Default number of samples each counter keeps buffered
pub const DEFAULT_SAMPLE_WINDOW: usize = 60;

/// Key of the main-thread timing counter
pub const MAIN_THREAD_KEY: &str = "Main Thread";

/// Key of the custom subsystem (visual effects) update timing counter
pub const VFX_UPDATE_KEY: &str = "VFX.Update";

/// Profiler category a counter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CounterCategory {
    Internal,
    #[default]
    Render,
}

/// Names a counter to acquire from the host profiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDescriptor {
    pub key: String,
    #[serde(default)]
    pub category: CounterCategory,
}

impl CounterDescriptor {
    pub fn new(key: impl Into<String>, category: CounterCategory) -> Self {
        Self {
            key: key.into(),
            category,
        }
    }

    pub fn render(key: impl Into<String>) -> Self {
        Self::new(key, CounterCategory::Render)
    }
}

/// The twelve counters tracked by default
pub fn standard_counters() -> Vec<CounterDescriptor> {
    let mut counters = vec![CounterDescriptor::new(
        MAIN_THREAD_KEY,
        CounterCategory::Internal,
    )];
    counters.extend(
        [
            "CPU Total Frame Time",
            "CPU Main Thread Frame Time",
            "CPU Render Thread Frame Time",
            "GPU Frame Time",
            "Batches Count",
            "Draw Calls Count",
            "SetPass Calls Count",
            "Triangles Count",
            "Vertices Count",
            "Shadow Casters Count",
            VFX_UPDATE_KEY,
        ]
        .into_iter()
        .map(CounterDescriptor::render),
    );
    counters
}
