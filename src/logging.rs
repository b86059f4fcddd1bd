//! Tracing setup and lightweight timing scopes.
//!
//! Warnings go to stderr (tunable with `RUST_LOG`). When a debug log path is
//! given, a second layer records everything at `debug` and above to that file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

static PERF_ENABLED: AtomicBool = AtomicBool::new(false);

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the debug log file cannot be created or a subscriber is
/// already installed.
pub fn init(debug_log: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_filter(
        EnvFilter::from_default_env().add_directive(Level::WARN.into()),
    );

    let file_layer = match debug_log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create debug log {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    if let Some(path) = debug_log {
        tracing::info!(path = %path.display(), "wisata debug log start");
    }
    Ok(())
}

/// Times a region of code; reports on drop when perf logging is on.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !perf_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(target: "wisata::perf", scope = self.name, elapsed_ms, "perf");
    }
}

pub fn set_perf_enabled(enabled: bool) {
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn perf_enabled() -> bool {
    PERF_ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_perf_enabled_toggles_runtime_flag() {
        set_perf_enabled(true);
        assert!(perf_enabled());

        set_perf_enabled(false);
        assert!(!perf_enabled());
    }

    #[test]
    fn test_scope_records_name() {
        let scope = scope("test.scope");
        assert_eq!(scope.name, "test.scope");
    }
}
