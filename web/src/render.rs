//! Pure description of the counter page.

use crate::state::CounterState;

pub const TITLE: &str = "Rust + Vite Workspace";
pub const GREETING: &str = "Hello world!!!";
pub const SOURCE_FILE: &str = "src/components/counter_view.rs";

/// Everything the page shows for one count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterPage {
    pub title: &'static str,
    pub greeting: &'static str,
    pub button_label: String,
    pub caption: String,
}

pub fn render(state: &CounterState) -> CounterPage {
    CounterPage {
        title: TITLE,
        greeting: GREETING,
        button_label: format!("count is {}", state.count()),
        caption: format!("Edit {SOURCE_FILE} and rebuild to see your changes"),
    }
}
