use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Flattened JSON, one event per line.
    Json,
    /// Human readable, for interactive terminals.
    Pretty,
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` controls filtering (default "info"). When `TOKIO_CONSOLE` is set
/// the tokio-console layer is installed instead.
pub fn init_logging() {
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
    } else {
        init_normal_logging(default_log_mode());
    }
}

pub fn init_normal_logging(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match mode {
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt().with_env_filter(filter).compact().init(),
    }
}
