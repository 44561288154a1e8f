//! Pure conversion functions: TOML config and CLI strings -> crate types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use luach_calendar::GregorianDate;
use luach_catalog::Catalog;
use luach_parasha::Rite;

/// Parses a rite name into the corresponding enum variant.
pub fn parse_rite(s: &str) -> Result<Rite> {
    match s.trim().to_lowercase().as_str() {
        "diaspora" => Ok(Rite::Diaspora),
        "israel" => Ok(Rite::Israel),
        other => bail!("unknown rite: {other:?} (expected \"diaspora\" or \"israel\")"),
    }
}

/// Resolves the rite, preferring the CLI override over the config value.
pub fn resolve_rite(cli: Option<&str>, config: &str) -> Result<Rite> {
    parse_rite(cli.unwrap_or(config))
}

/// Parses a `YYYY-MM-DD` date, or returns today's local date when absent.
pub fn parse_date(s: Option<&str>) -> Result<GregorianDate> {
    match s {
        Some(s) => s.parse().with_context(|| format!("invalid date: {s:?}")),
        None => GregorianDate::today().context("system date is outside the supported range"),
    }
}

/// Loads the catalogue from `path`, or the bundled one when no path is set.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalogue: {}", path.display()))?,
        None => Catalog::bundled().context("bundled catalogue is malformed")?,
    };
    info!(products = catalog.len(), "catalogue loaded");
    Ok(catalog)
}

/// Formats a bind address, bracketing IPv6 hosts.
pub fn bind_address(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
