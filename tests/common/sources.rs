//! Counter sources for integration tests

use framestats_rs::CounterSource;

/// Source whose counters all report the same window every frame
pub struct ConstantSource {
    keys: Vec<String>,
    window: Vec<f64>,
    pub reads: usize,
}

impl ConstantSource {
    pub fn new(keys: &[&str], window: &[f64]) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            window: window.to_vec(),
            reads: 0,
        }
    }
}

impl CounterSource for ConstantSource {
    fn counter_keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    fn is_active(&self) -> bool {
        true
    }

    fn take_samples(&mut self, key: &str) -> Option<Vec<f64>> {
        self.reads += 1;
        self.keys.iter().any(|k| k == key).then(|| self.window.clone())
    }
}
