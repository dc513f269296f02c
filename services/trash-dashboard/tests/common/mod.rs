//! Shared helpers for running the detection API mock in tests

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use trash_api_mock::{new_state_handle, Config, StateHandle};

/// A detection API mock serving on an ephemeral local port
#[derive(Debug)]
pub struct MockApi {
    pub base_url: String,
    pub state: StateHandle,
    cancel: CancellationToken,
    server: JoinHandle<trash_api_mock::Result<()>>,
}

impl MockApi {
    pub async fn start(config: Config) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = new_state_handle(&config);
        let cancel = CancellationToken::new();

        let server = tokio::spawn({
            let state = state.clone();
            let cancel = cancel.clone();
            async move { trash_api_mock::serve(listener, state, &config.allowed_origins, cancel).await }
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            cancel,
            server,
        }
    }

    pub async fn hits(&self, path: &str) -> u64 {
        self.state.read().await.hits(path)
    }

    pub async fn stop(mut self) {
        self.cancel.cancel();
        (&mut self.server).await.unwrap().unwrap();
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
