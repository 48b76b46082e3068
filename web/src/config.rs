use log::Level;

/// Starting value and increment of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    pub initial_value: i32,
    pub step: i32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            step: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        let level = if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        };
        Self { level }
    }
}
