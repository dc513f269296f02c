//! System status view

use leptos::prelude::*;

use super::fetch_once_on_mount;
use crate::api::ApiClient;
use crate::fetch::FetchState;

/// Shown until the status fetch resolves, and kept if it fails
pub const STATUS_PLACEHOLDER: &str = "Loading...";

pub fn status_text(state: &FetchState<String>) -> String {
    state
        .value()
        .cloned()
        .unwrap_or_else(|| STATUS_PLACEHOLDER.to_string())
}

/// Fetches /status once on mount and displays the reported string
#[component]
pub fn StatusView(client: ApiClient) -> impl IntoView {
    let (state, set_state) = signal(FetchState::<String>::Initial);
    fetch_once_on_mount("status", async move { client.fetch_status().await }, set_state);

    view! {
        <section class="status-view" data-fetch=move || state.with(FetchState::label)>
            <h2>"System Status"</h2>
            <p>{move || state.with(status_text)}</p>
        </section>
    }
}
