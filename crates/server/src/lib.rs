//! Meridian Server
//!
//! Thin JSON-over-HTTP layer in front of the clock registry.
//!
//! # Architecture
//!
//! - **Config**: JSON seed list and listener settings ([`ServerConfig`])
//! - **Presentation**: axum router and handlers; owns the navigation cursor
//! - **Engine**: [`meridian_registry::ClockRing`], shared behind one lock
//!
//! # Example
//!
//! ```ignore
//! use meridian_server::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::from_config(ServerConfig::default()).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod presentation;

pub use config::{ClockSeed, ConfigError, HttpConfig, ServerConfig};
pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use meridian_clock::SystemClock;
use meridian_ports::Clock;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The clock server: configuration plus the shared ring state
pub struct Server {
    pub config: ServerConfig,
    pub state: Arc<AppState>,
}

impl Server {
    /// Build the ring from `config`, reading wall-clock time
    pub fn from_config(config: ServerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Build the ring from `config` with an explicit time source
    pub fn with_clock(config: ServerConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        let ring = config.build_ring(clock)?;
        Ok(Server {
            config,
            state: Arc::new(AppState::new(ring)),
        })
    }

    /// Create the REST API router
    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.state))
    }

    /// Serve until the process is stopped
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_address();
        let router = self.router();

        log::info!("{} listening on http://{}", self.config.name, addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
