//! Logging Infrastructure
//!
//! Console logging by default; when a log directory is given, output goes to
//! a daily rolling file instead.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "storefront";

/// Initialize the logger at `info`, console only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. A `log_dir` that does not
/// exist is created; if that fails logging falls back to the console.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = build_filter(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && prepare_log_dir(Path::new(dir))
    {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        // try_init: a second call (tests, embedding) must not panic
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.with_writer(std::io::stderr).try_init();
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
    let level = log_level.unwrap_or("info");
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Make sure `dir` exists; false when it cannot be created
pub fn prepare_log_dir(dir: &Path) -> bool {
    if dir.is_dir() {
        return true;
    }
    match std::fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Cannot create log directory {}: {}", dir.display(), e);
            false
        }
    }
}
