//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber to write structured logs
//! to a rotating file. The terminal itself belongs to the UI renderer, so
//! nothing is ever logged to stdout or stderr.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::infrastructure;
use crate::Config;

/// `io::Write` adapter over the shared rotating file writer.
///
/// The fmt layer creates one of these per event; all clones funnel into
/// the same `FileWriter`.
#[derive(Debug, Clone)]
struct LogWriter {
    inner: Arc<FileWriter>,
}

impl std::io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Initializes the tracing subscriber with rotating file output.
///
/// Sets up a pipeline that filters events by level and appends them,
/// without ANSI styling, to `<data dir>/stackdash/stackdash.log` (rotated
/// at 10 MB with 3 backups retained).
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`, when set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if directory creation fails (observability is
///   optional)
/// - Idempotent: only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_dir = infrastructure::log_dir();
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let writer = LogWriter {
        inner: Arc::new(FileWriter::new(log_dir.join("stackdash.log"))),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone());

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
