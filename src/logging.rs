use tracing_subscriber::EnvFilter;

/// Log targets enabled by the verbosity flag. `tower_http` carries the
/// per-request spans of the HTTP server.
const TARGETS: &[&str] = &[
    "luach",
    "luach_api",
    "luach_calendar",
    "luach_catalog",
    "luach_parasha",
    "tower_http",
];

/// Maps `-v` count to a level: none warn, `-v` info, `-vv` debug, more trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr so command output on
/// stdout stays clean. `RUST_LOG` takes precedence over the flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
