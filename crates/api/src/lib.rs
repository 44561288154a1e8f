//! # luach-api
//!
//! HTTP facade for the kosher products service: the product catalogue,
//! today's Hebrew date and the weekly parasha, served as JSON.
//!
//! # Routes
//!
//! - `GET /` - plain-text banner
//! - `GET /api/produtos` - product catalogue as a JSON array
//! - `GET /api/date` - `{gregorian, hebrew: {year, month, day, monthName}}`
//! - `GET /api/parashat` - `{hebrewName, transliteratedName}`
//!
//! `/api/date` and `/api/parashat` accept `?date=YYYY-MM-DD` in place of the
//! server date. Failures return `{"error": "InvalidDate"}` (400) or
//! `{"error": "UnsupportedDateRange"}` (500).

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::BANNER;
pub use state::{AppState, Clock};

use routes::{date_handler, homepage_handler, parashat_handler, products_handler};

/// Builds the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(homepage_handler))
        .route("/api/produtos", get(products_handler))
        .route("/api/date", get(date_handler))
        .route("/api/parashat", get(parashat_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `listener` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns any I/O error raised by the underlying server.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!(%address, "server running");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
