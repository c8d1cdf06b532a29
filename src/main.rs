//! Trip Planner Frontend Entry Point

mod app;
mod backup;
mod components;
mod config;
mod context;
mod dialogs;
mod error;
mod files;
mod itinerary;
mod models;
mod seed;
mod shopping;
mod storage;
mod store;
mod todos;

use app::App;
use config::PlannerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // The logger is configured from the file, so a parse error is reported after it is up
    let bundled = PlannerConfig::bundled();
    let config = bundled.as_ref().cloned().unwrap_or_default();
    if let Err(e) = rolling_logger::init_logger(&config.trip.title, config.logging.level_filter(), config.logging.capacity) {
        web_sys::console::error_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    if let Err(e) = bundled {
        log::warn!("[CONFIG] planner.toml invalid, using defaults: {}", e);
    }
    log::info!("[APP] {} v{} starting", config.trip.title, config.trip.version);

    mount_to_body(move || view! { <App config=config /> });
}
