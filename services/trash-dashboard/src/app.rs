//! Main App component

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{StatusView, TrashCountView};
use crate::config::ApiConfig;

pub const TITLE: &str = "Trash Detection System";

/// Root application component
#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let client = ApiClient::new(config);
    tracing::debug!("Mounting dashboard against {:?}", client.config().base_url);

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>{TITLE}</h1>
            <StatusView client=client.clone() />
            <TrashCountView client=client />
        </main>
    }
}
