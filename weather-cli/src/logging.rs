//! Logging init: stderr, filtered by `RUST_LOG` or the `-v` count.

use tracing_subscriber::EnvFilter;

fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,weather_core=info,weather=info",
        _ => "info,weather_core=debug,weather=debug",
    }
}

/// Keeps stdout free for the rendered weather.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
