mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod state;

pub use components::CounterView;
pub use config::{CounterConfig, LogConfig};
pub use error::{Result, WebError};
pub use render::{CounterPage, render};
pub use state::CounterState;
