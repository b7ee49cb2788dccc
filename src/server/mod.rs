//! HTTP surface of the studio.

mod error;
mod health;
mod router;
mod shutdown;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub use error::ApiError;
pub use health::HealthStatus;
pub use router::{build_router, AppState, MutationResponse, SelectionResponse, SessionView};
pub use shutdown::ShutdownManager;

/// Ports tried after the configured one when it is busy.
const PORT_FALLBACK_RANGE: u16 = 100;

/// Initialize tracing to stderr.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call more than once; later
/// calls are ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Could not find available port in range {start}-{end}")]
    NoAvailablePort { start: u16, end: u16 },

    #[error("try_bind() must be called before run()")]
    NotBound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct StudioServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive between try_bind() and run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl StudioServer {
    pub fn new(config: &Config) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state: AppState::new(config),
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Binds `bind_addr`, moving up to the next free port if it is taken.
    /// Port 0 asks the OS for any free port.
    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let addr: SocketAddr =
            bind_addr
                .parse()
                .map_err(|source| ServerError::InvalidBindAddress {
                    addr: bind_addr.to_string(),
                    source,
                })?;

        let start_port = addr.port();
        let end_port = if start_port == 0 {
            0
        } else {
            start_port.saturating_add(PORT_FALLBACK_RANGE)
        };

        for port in start_port..=end_port {
            let try_addr = SocketAddr::new(addr.ip(), port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!(addr = %actual_addr, "Studio server bound");
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!(port, error = %e, "Port busy");
                }
            }
        }

        Err(ServerError::NoAvailablePort {
            start: start_port,
            end: end_port,
        })
    }

    pub fn handle(&self) -> StudioHandle {
        StudioHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serves until shutdown is signaled.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!(addr = %self.addr, "Starting studio server");

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::warn!(error = %e, "Signal handler failed, shutting down");
                }
            })
            .into_future()
            .await?;

        tracing::info!("Studio server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct StudioHandle {
    shutdown: Arc<ShutdownManager>,
}

impl StudioHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
