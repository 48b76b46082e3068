use crate::config::CounterConfig;

/// The one piece of state the counter page owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    count: i32,
    step: i32,
}

impl CounterState {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            count: config.initial_value,
            step: config.step,
        }
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Adds one step to the count. Wraps at `i32::MAX` instead of panicking,
    /// so debug and release builds agree. With a zero or negative step the
    /// count stands still or falls.
    pub fn increment(&mut self) {
        self.count = self.count.wrapping_add(self.step);
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}
