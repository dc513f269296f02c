//! Trash count view

use leptos::prelude::*;

use super::fetch_once_on_mount;
use crate::api::ApiClient;
use crate::fetch::FetchState;

pub fn trash_count_text(state: &FetchState<u64>) -> String {
    format!(
        "Total Trash Detected: {}",
        state.value().copied().unwrap_or(0)
    )
}

/// Fetches /trash-count once on mount and displays the total
#[component]
pub fn TrashCountView(client: ApiClient) -> impl IntoView {
    let (state, set_state) = signal(FetchState::<u64>::Initial);
    fetch_once_on_mount(
        "trash count",
        async move { client.fetch_trash_count().await },
        set_state,
    );

    view! {
        <section class="trash-count-view" data-fetch=move || state.with(FetchState::label)>
            <h2>"Trash Count"</h2>
            <p>{move || state.with(trash_count_text)}</p>
        </section>
    }
}
