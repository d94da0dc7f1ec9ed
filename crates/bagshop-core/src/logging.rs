//! Logging infrastructure for BagShop.
//!
//! Structured logging using the `tracing` ecosystem.
//!
//! - Console output to stderr with configurable verbosity
//! - Optional JSON lines file output (daily rolling) when a log directory is given
//! - `RUST_LOG` overrides the default filter
//!
//! ## Example
//!
//! ```no_run
//! use bagshop_core::logging;
//!
//! let _guard = logging::init_logging(None, false).expect("logging init");
//!
//! tracing::info!("bagshop started");
//! tracing::debug!(orders = 10900, "computing breakdown");
//! ```

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{BagshopError, Result};

/// File name prefix for rolling log files.
pub const LOG_FILE_NAME: &str = "bagshop.log";

/// Guard that must be held to ensure log flushing on shutdown.
///
/// Dropping it flushes pending file log entries.
pub struct LogGuard {
    file_guard: Option<WorkerGuard>,
}

impl LogGuard {
    /// Whether a file appender is attached.
    pub fn has_file_output(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Initialize the BagShop logging system.
///
/// Console logging goes to stderr in a compact human-readable format. When
/// `log_dir` is set, JSON lines are also written to `<log_dir>/bagshop.log.<date>`.
///
/// `verbose` switches the default level from INFO to DEBUG.
pub fn init_logging(log_dir: Option<PathBuf>, verbose: bool) -> Result<LogGuard> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bagshop={default_level},bagshop_cost={default_level},bagshop_config={default_level}"
        ))
    });

    let (file_layer, file_guard) = match &log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| BagshopError::DirectoryCreation {
                path: dir.clone(),
                source: e,
            })?;

            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_span_list(true);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(verbose)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| BagshopError::LoggingInit {
            message: e.to_string(),
        })?;

    tracing::debug!(
        log_dir = ?log_dir.as_ref().map(|d| d.display().to_string()),
        verbose,
        "logging initialized"
    );

    Ok(LogGuard {
        file_guard,
    })
}

/// Initialize minimal console-only logging for tests.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Get the default log directory path.
///
/// Returns `~/.bagshop/logs/`
pub fn default_log_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BagshopError::internal("home directory could not be determined"))?;

    Ok(home.join(".bagshop").join("logs"))
}
