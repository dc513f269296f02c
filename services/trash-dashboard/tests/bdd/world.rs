//! BDD test world for the trash dashboard

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use cucumber::{event, gherkin, World};
use leptos::prelude::*;
use trash_dashboard::api::{STATUS_PATH, TRASH_COUNT_PATH};
use trash_dashboard::{App, ApiConfig};

use crate::common::MockApi;

/// Slack after the mock has seen a request, for the client to settle its view
const SETTLE_MARGIN: Duration = Duration::from_millis(100);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Default, World)]
pub struct DashboardWorld {
    pub mock_config: trash_api_mock::Config,
    pub mock: Option<MockApi>,
    pub unconfigured: bool,
    /// Owner of the currently mounted `App`
    pub mounted: Option<Owner>,
    /// HTML of the page as last rendered
    pub page: String,
    pub mounts: u64,
}

impl DashboardWorld {
    async fn api_config(&mut self) -> ApiConfig {
        if self.unconfigured {
            return ApiConfig::default();
        }
        if self.mock.is_none() {
            self.mock = Some(MockApi::start(self.mock_config.clone()).await);
        }
        let mock = self.mock.as_ref().expect("mock just started");
        ApiConfig::new(&mock.base_url)
    }

    /// Mount a fresh `App`, unmounting the previous one first
    pub async fn mount(&mut self) -> impl IntoView {
        self.unmount();
        let config = self.api_config().await;
        let owner = Owner::new();
        let view = owner.with(|| view! { <App config=config /> });
        self.mounted = Some(owner);
        self.mounts += 1;
        view
    }

    pub fn unmount(&mut self) {
        if let Some(owner) = self.mounted.take() {
            owner.cleanup();
        }
    }

    /// Mount, wait for both views to settle and render the page
    pub async fn mount_and_render(&mut self) {
        let view = self.mount().await;
        self.wait_for_responses().await;
        self.page = self.render(view);
    }

    /// Mount, render while the fetches are in flight, then unmount
    pub async fn mount_and_unmount_after(&mut self, after: Duration) {
        let view = self.mount().await;
        tokio::time::sleep(after).await;
        self.page = self.render(view);
        self.unmount();
        self.wait_for_responses().await;
    }

    fn render(&self, view: impl IntoView) -> String {
        let owner = self.mounted.as_ref().expect("dashboard is not mounted");
        owner.with(|| view.to_html())
    }

    /// Wait until every mount's requests reached the mock and had time to complete
    async fn wait_for_responses(&self) {
        let Some(mock) = &self.mock else {
            for _ in 0..16 {
                tokio::task::yield_now().await;
            }
            return;
        };

        let deadline = Instant::now() + REQUEST_TIMEOUT;
        while mock.hits(STATUS_PATH).await < self.mounts
            || mock.hits(TRASH_COUNT_PATH).await < self.mounts
        {
            assert!(
                Instant::now() < deadline,
                "dashboard did not reach the detection API"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let delay = Duration::from_millis(self.mock_config.response_delay_ms);
        tokio::time::sleep(delay + SETTLE_MARGIN).await;
    }

    /// Markup of the view section with the given class
    pub fn section(&self, class: &str) -> &str {
        let marker = format!(r#"class="{class}""#);
        let start = self
            .page
            .find(&marker)
            .unwrap_or_else(|| panic!("no {class} section in page:\n{}", self.page));
        let rest = &self.page[start..];
        let end = rest.find("</section>").unwrap_or(rest.len());
        &rest[..end]
    }

    pub async fn hits(&self, path: &str) -> u64 {
        match &self.mock {
            Some(mock) => mock.hits(path).await,
            None => 0,
        }
    }
}

/// Shut the scenario's mock down once it has finished
pub fn stop_mock<'a>(
    _feature: &'a gherkin::Feature,
    _rule: Option<&'a gherkin::Rule>,
    _scenario: &'a gherkin::Scenario,
    _finished: &'a event::ScenarioFinished,
    world: Option<&'a mut DashboardWorld>,
) -> Pin<Box<dyn Future<Output = ()> + 'a>> {
    Box::pin(async move {
        if let Some(world) = world {
            world.unmount();
            if let Some(mock) = world.mock.take() {
                mock.stop().await;
            }
        }
    })
}
