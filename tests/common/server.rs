//! Test server lifecycle management
//!
//! Each test gets an isolated server, and with it an empty session store.

use super::constants::*;
use scentco_catalog_server::config::MatchingSettings;
use scentco_catalog_server::server::{server::make_app, RequestsLoggingLevel, ServerConfig};
use scentco_catalog_server::user::SessionLimits;
use scentco_catalog_server::Catalog;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance serving the built-in catalog
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with default matching settings
    pub async fn spawn() -> Self {
        Self::spawn_with_matching(MatchingSettings::default()).await
    }

    /// Spawns a new test server with custom matching settings
    ///
    /// # Panics
    ///
    /// Panics if the catalog cannot be built, the port cannot be bound or the
    /// server doesn't become ready within timeout.
    pub async fn spawn_with_matching(matching: MatchingSettings) -> Self {
        let catalog = Catalog::builtin()
            .catalog
            .expect("Failed to build the built-in catalog");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 0, // Disable caching in tests
            frontend_dir_path: None,
            analysis_delay_ms: 0,
            matching,
            session_limits: SessionLimits::default(),
        };

        let app = make_app(config, catalog).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
