use leptos::prelude::*;
use log::info;

use web::{CounterView, LogConfig, logging};

pub fn main() {
    if let Err(err) = logging::init(LogConfig::default()) {
        leptos::logging::error!("{err}");
    }

    info!("mounting counter view");
    mount_to_body(|| {
        view! { <CounterView initial_value=0 step=1/> }
    })
}
