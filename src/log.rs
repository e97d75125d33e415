// src/log.rs
//
// Logging front: short macros over `tracing`, plus a one-shot file subscriber.
// Front ends call `init()` once; the library only emits events.

use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_DIR, LOG_FILE};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the file subscriber (`logs/lab_feeds.log.<date>`).
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<(), String> {
    std::fs::create_dir_all(LOG_DIR).map_err(|e| e.to_string())?;
    let appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| e.to_string())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
