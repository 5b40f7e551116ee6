use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Precedence: `RUST_LOG` when set, otherwise the `-v` count, otherwise the
/// configured level.
pub fn init(configured_level: &str, verbose: u8) {
    let level = match verbose {
        0 => configured_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
