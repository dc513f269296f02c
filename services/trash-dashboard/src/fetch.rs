//! One-shot fetch lifecycle shared by the dashboard views
//!
//! A view owns a `FetchState` slot and a `MountScope`. On mount it runs a
//! single fetch through `run_one_shot`; the outcome is applied only while
//! the scope is still mounted, so a late response never touches the state
//! of a view that is gone.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Display state of one fetched value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No response yet; the placeholder is shown
    #[default]
    Initial,
    /// The one-shot fetch succeeded
    Resolved(T),
    /// The one-shot fetch failed; the placeholder stays on screen
    Failed,
}

impl<T> FetchState<T> {
    /// Apply the outcome of the mount's fetch.
    ///
    /// Only `Initial` transitions. Returns false when the state had already
    /// settled and the outcome was ignored.
    pub fn settle(&mut self, outcome: crate::Result<T>) -> bool {
        if !matches!(self, FetchState::Initial) {
            return false;
        }
        *self = match outcome {
            Ok(value) => FetchState::Resolved(value),
            Err(_) => FetchState::Failed,
        };
        true
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    /// Stable name used for the `data-fetch` attribute
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Initial => "initial",
            FetchState::Resolved(_) => "resolved",
            FetchState::Failed => "failed",
        }
    }
}

/// Lifetime of one mounted view instance
#[derive(Debug, Clone, Default)]
pub struct MountScope {
    token: CancellationToken,
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate the scope; pending results will be discarded
    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }
}

/// What happened to the outcome of a one-shot fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    Discarded,
}

/// Await `fetch` once and hand its outcome to `apply` if `scope` is still mounted.
///
/// Failures are logged here and then passed on, so the view can record
/// them without surfacing anything further.
pub async fn run_one_shot<T, Fut, F>(
    view: &str,
    scope: &MountScope,
    fetch: Fut,
    apply: F,
) -> Delivery
where
    Fut: Future<Output = crate::Result<T>>,
    F: FnOnce(crate::Result<T>),
{
    tracing::debug!("{}: one-shot fetch started", view);
    let outcome = fetch.await;

    if !scope.is_mounted() {
        tracing::debug!("{}: view unmounted before fetch settled, discarding", view);
        return Delivery::Discarded;
    }

    if let Err(e) = &outcome {
        tracing::warn!("Failed to fetch {}: {}", view, e);
    }
    apply(outcome);
    Delivery::Applied
}
