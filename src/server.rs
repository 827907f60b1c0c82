//! Dashboard web server

use std::net::SocketAddr;

use axum::{extract::State, response::Html, routing::get, Router};
use bytes::Bytes;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dashboard::Dashboard;
use crate::error::DashboardError;

#[derive(Clone)]
struct AppState {
    page: Bytes,
}

/// Dashboard server
pub struct DashboardServer {
    page: Bytes,
    addr: SocketAddr,
}

impl DashboardServer {
    pub fn new(dashboard: &Dashboard, addr: SocketAddr) -> Self {
        Self {
            page: dashboard.page(),
            addr,
        }
    }

    /// Bind and serve until Ctrl-C or SIGTERM.
    pub async fn start(&self) -> Result<(), DashboardError> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|source| DashboardError::Bind {
                addr: self.addr.to_string(),
                source,
            })?;

        info!(addr = %self.addr, "dashboard server listening");
        info!("open http://localhost:{} in your browser", self.addr.port());

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(DashboardError::Serve)?;

        info!("dashboard server stopped");
        Ok(())
    }

    pub fn router(&self) -> Router {
        create_app(self.page.clone())
    }
}

/// `GET /` serves the prerendered page; every other path is a 404.
pub fn create_app(page: Bytes) -> Router {
    Router::new()
        .route("/", get(index_page))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { page })
}

async fn index_page(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl-C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
