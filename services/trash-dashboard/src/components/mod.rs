//! Dashboard view components

pub mod status;
pub mod trash_count;

pub use status::StatusView;
pub use trash_count::TrashCountView;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::fetch::{run_one_shot, FetchState, MountScope};

/// Run `fetch` once for the current owner and settle `set_state` with its outcome.
///
/// The mount scope ends when the owner is cleaned up, so an outcome that
/// arrives after unmount leaves `set_state` untouched.
pub fn fetch_once_on_mount<T, Fut>(
    view: &'static str,
    fetch: Fut,
    set_state: WriteSignal<FetchState<T>>,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = crate::Result<T>> + 'static,
{
    let scope = MountScope::new();

    on_cleanup({
        let scope = scope.clone();
        move || scope.unmount()
    });

    spawn_local(async move {
        run_one_shot(view, &scope, fetch, move |outcome| {
            set_state.update(|s| {
                s.settle(outcome);
            });
        })
        .await;
    });
}
