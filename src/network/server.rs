//! HTTP Server
//!
//! Binds the listen address and serves the catalog router until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::Config;
use crate::error::Result;
use crate::service::CatalogService;
use crate::storage::Store;

use super::router;

/// HTTP server for the catalog
pub struct Server<S> {
    config: Config,
    service: Arc<CatalogService<S>>,
    shutdown: Arc<Notify>,
}

impl<S: Store> Server<S> {
    /// Create a new server with the given config and service
    pub fn new(config: Config, service: Arc<CatalogService<S>>) -> Self {
        Self {
            config,
            service,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Bind `config.listen_addr` and serve until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        tracing::info!("Listening on http://{}", local_addr);

        let app = router(Arc::clone(&self.service));
        let shutdown = Arc::clone(&self.shutdown);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.notified().await })
            .await?;

        tracing::info!("Server on {} stopped", local_addr);
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    ///
    /// Safe to call before `serve` starts waiting; the signal is kept.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
