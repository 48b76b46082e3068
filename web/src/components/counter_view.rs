use leptos::prelude::*;
use log::debug;

use crate::config::CounterConfig;
use crate::render::{CounterPage, render};
use crate::state::CounterState;

/// Two headings, a button that counts its clicks, and an edit hint.
#[component]
pub fn CounterView(
    /// Count shown on mount.
    #[prop(default = 0)]
    initial_value: i32,
    /// Amount added per click. Zero or negative values make the count stand
    /// still or fall.
    #[prop(default = 1)]
    step: i32,
) -> impl IntoView {
    let state = RwSignal::new(CounterState::new(CounterConfig {
        initial_value,
        step,
    }));
    let page: Memo<CounterPage> = Memo::new(move |_| state.with(render));

    let on_increment = move |_| {
        state.update(CounterState::increment);
        debug!("count is now {}", state.with_untracked(CounterState::count));
    };

    view! {
        <div class="counter-view">
            <h1>{move || page.with(|p| p.title)}</h1>
            <h2>{move || page.with(|p| p.greeting)}</h2>
            <div class="card">
                <button type="button" on:click=on_increment>
                    {move || page.with(|p| p.button_label.clone())}
                </button>
                <p>{move || page.with(|p| p.caption.clone())}</p>
            </div>
        </div>
    }
}
