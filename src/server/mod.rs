//! HTTP server wiring for the verification service.
//!
//! Each request is handled independently on the async runtime; the only
//! shared state is the immutable access token, so no synchronisation is
//! needed across concurrent requests.

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::github::{PersonalAccessToken, VerificationError};

/// Shared application state: process-wide configuration, read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    token: PersonalAccessToken,
}

impl AppState {
    /// Creates state from the configured access token.
    #[must_use]
    pub const fn new(token: PersonalAccessToken) -> Self {
        Self { token }
    }

    /// The configured GitHub access token.
    #[must_use]
    pub const fn token(&self) -> &PersonalAccessToken {
        &self.token
    }
}

/// Builds the application router with routes and request tracing.
///
/// Exposed separately from [`Server`] so tests can drive the router directly
/// without binding a socket.
#[must_use]
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/verify", post(handlers::verify_repository))
        .route("/process-js-ts", post(handlers::process_script_repository))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the verification service.
pub struct Server {
    addr: SocketAddr,
    app: Router,
}

impl Server {
    /// Creates a server that will listen on `addr`.
    #[must_use]
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self {
            addr,
            app: build_app(state),
        }
    }

    /// The address the server will bind to.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Binds the listener and serves requests until shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::Io`] when the listener cannot bind or the
    /// server loop fails.
    pub async fn run(self) -> Result<(), VerificationError> {
        let listener =
            tokio::net::TcpListener::bind(self.addr)
                .await
                .map_err(|error| VerificationError::Io {
                    message: format!("bind {addr} failed: {error}", addr = self.addr),
                })?;

        info!(addr = %self.addr, "listening");
        axum::serve(listener, self.app)
            .await
            .map_err(|error| VerificationError::Io {
                message: format!("server error: {error}"),
            })
    }
}
