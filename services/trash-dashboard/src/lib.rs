//! Trash Dashboard - Leptos frontend
//!
//! Single-page display of the detection system's status and trash count.
//! Each view fetches its value once when mounted.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod fetch;
pub mod io;

pub use api::ApiClient;
pub use app::App;
pub use config::ApiConfig;
pub use error::{DashboardError, FailureCause, Result};
pub use fetch::{run_one_shot, Delivery, FetchState, MountScope};

/// Browser entry point: install logging and mount the app on `<body>`
#[cfg(feature = "csr")]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = ApiConfig::from_build_env();
    if config.is_configured() {
        tracing::info!("Trash dashboard using API at {}", config.base_url);
    } else {
        tracing::warn!(
            "{} was not set at build time; requests will fail",
            crate::config::BASE_URL_ENV
        );
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
