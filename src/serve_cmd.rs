//! Serve command: run the HTTP API until interrupted.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, info_span};

use luach_api::AppState;

use crate::cli::ServeArgs;
use crate::config::LuachConfig;
use crate::convert;

/// Builds the shared state, binds the listener and serves until shutdown.
pub fn run(args: ServeArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("serve").entered();

    let rite = convert::resolve_rite(args.rite.as_deref(), &config.calendar.rite)?;
    let catalog_path = args.catalog.as_deref().or(config.catalog.path.as_deref());
    let catalog = convert::load_catalog(catalog_path)?;
    let state = AppState::new(catalog, rite).shared();

    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let address = convert::bind_address(host, port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        info!(%address, %rite, "binding");
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        luach_api::serve(listener, state)
            .await
            .context("server error")
    })
}
