//! Recipe Box Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod pages;
mod storage;
mod store;

use app::{load_config, App};
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = load_config();
    let config = loaded.clone().unwrap_or_default();

    match console_logger::init(&LoggerConfig::with_level(config.log_level.clone())) {
        Ok(logs) => tracing::debug!(buffered = logs.recent_lines().len(), "logger ready"),
        Err(e) => web_sys::console::warn_1(&format!("logging disabled: {e}").into()),
    }
    if let Err(e) = loaded {
        tracing::error!(error = %e, "invalid build configuration; using defaults");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
