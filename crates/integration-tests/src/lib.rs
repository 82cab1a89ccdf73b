//! Integration tests for the inventory server.
//!
//! Each test starts the real router on `127.0.0.1:0` inside the test runtime
//! and talks to it over HTTP, so no external server is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p inventory-integration-tests
//! ```

use std::net::SocketAddr;

use inventory_server::{app, config::ServerConfig, state::AppState};
use inventory_ui::HttpTransport;
use url::Url;

/// A server running on an ephemeral port for the duration of a test.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Bind the router to an ephemeral port and serve it in the background.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    #[allow(clippy::expect_used)]
    pub async fn start() -> Self {
        let state = AppState::new(ServerConfig::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let router = app(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            addr,
            state,
            client: reqwest::Client::new(),
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A transport pointed at this server's GraphQL endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the endpoint URL does not parse.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(Url::parse(&self.url("/graphql")).expect("Invalid endpoint URL"))
    }
}
